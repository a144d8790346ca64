//! The default stylesheet for the spinner component.
//!
//! Hosts built with cargo-leptos get it through `style-file`; anything else
//! can inline [`SPINNER_CSS`] or serve it themselves.

/// Defines the `spinner` and `spinnerInvert` classes and the `spin` keyframes.
pub const SPINNER_CSS: &str = include_str!("../style/spinner.css");
