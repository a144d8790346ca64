//! This module defines the `error_template` component, the page the demo app
//! shows for unmatched routes.
//!
//! It includes an `AppError` enum for application-level errors and sets the
//! matching HTTP status code when rendered on the server.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s out of an `Errors` map.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders an error page listing every `AppError` in `errors`.
///
/// On the server the response status is taken from the first error found.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("demo").child((
        h1().child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                div().child(format!("{}| {}", error.status_code(), error))
            })
            .collect_view(),
        A(AProps::builder()
            .href("/")
            .children(ToChildren::to_children(|| "Back to the demo"))
            .build()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn app_errors_collects_not_found() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);

        let found = app_errors(errors);

        assert_eq!(found.len(), 1);
        assert_matches!(found[0], AppError::NotFound);
    }

    #[test]
    fn app_errors_is_empty_without_errors() {
        assert!(app_errors(Errors::default()).is_empty());
    }
}
