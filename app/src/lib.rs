//! A loading spinner component for Leptos, plus the demo app that shows it.
//!
//! The reusable pieces are [`components::spinner`] and [`styles`]; [`shell`]
//! and [`component`] wire them into a routed demo page for the server and
//! frontend crates.

use crate::components::error_template;
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
mod demo;
pub mod styles;

pub use components::spinner::{
    Spinner, SpinnerClasses, SpinnerConfig, SpinnerNode, SpinnerVariant, provide_spinner_classes,
};

/// Path of the stylesheet cargo-leptos builds from `style-file`.
fn stylesheet_href(options: &LeptosOptions) -> String {
    format!("/{}/{}.css", options.site_pkg_dir, options.output_name)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let href = stylesheet_href(&options);
    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href(href)
                    .build(),
            ),
            Title(TitleProps::builder().text("Spinner").build()),
        )),
        body().child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <main>
                <FlatRoutes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                    error_template::component(outside_errors)
                }>
                    <Route path=StaticSegment("") view=demo::component/>
                </FlatRoutes>
            </main>
        </Router>
    }
}
