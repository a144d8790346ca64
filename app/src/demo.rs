//! The demo page: one row per documented spinner configuration.

use crate::components::spinner::{self, Spinner, SpinnerConfig};
use leptos::{
    html::{code, div, h1, section},
    prelude::*,
};

fn case(label: &'static str, dark: bool, spinner: impl IntoView) -> impl IntoView {
    let class = if dark {
        "demo-case demo-case--dark"
    } else {
        "demo-case"
    };

    div().class(class).child((spinner, code().child(label)))
}

pub fn component() -> impl IntoView {
    #[cfg(feature = "ssr")]
    tracing::debug!("rendering spinner demo page");

    section().class("demo").child((
        h1().child("Spinner"),
        case("{}", false, spinner::component(SpinnerConfig::default())),
        case("{invert: true}", true, view! { <Spinner invert=true/> }),
        case(
            r#"{width: "24px", height: "24px"}"#,
            false,
            view! { <Spinner width="24px" height="24px"/> },
        ),
        case(
            r#"{className: "mt-2", invert: true}"#,
            true,
            spinner::component(SpinnerConfig::new().with_class_name("mt-2").with_invert(true)),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_scenario() {
        let html = component().to_html();

        assert_eq!(html.matches(r#"class="spinner""#).count(), 2, "{html}");
        assert!(html.contains(r#"class="spinnerInvert""#), "{html}");
        assert!(html.contains(r#"class="mt-2 spinnerInvert""#), "{html}");
        assert!(html.contains(r#"style="width: 24px; height: 24px;""#), "{html}");
    }
}
