//! This module defines the `spinner` component, a loading indicator rendered
//! as a single styled box.
//!
//! The box carries exactly one of two variant classes (`spinner` or
//! `spinnerInvert`) next to any class supplied by the caller, plus optional
//! inline `width`/`height`. The variant classes themselves, including the
//! spin animation, live in the host stylesheet; see [`crate::styles`] for the
//! default one.

use leptos::{html::div, prelude::*};
use serde::{Deserialize, Serialize};
use shared_utils::class_names;

/// Class applied to spinners drawn on regular backgrounds.
pub const NORMAL_CLASS: &str = "spinner";
/// Class applied to spinners drawn on dark or inverted backgrounds.
pub const INVERTED_CLASS: &str = "spinnerInvert";

/// Display parameters for a single spinner render.
///
/// Every field is optional; `SpinnerConfig::default()` renders a normal
/// spinner with no inline dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpinnerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl SpinnerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    #[must_use]
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = Some(invert);
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The variant selected by `invert`. Only an explicit `true` inverts.
    pub fn variant(&self) -> SpinnerVariant {
        SpinnerVariant::from_invert(self.invert.unwrap_or(false))
    }

    /// Resolves this configuration into the node that will be rendered.
    ///
    /// Dimensions are passed through verbatim; blank strings count as unset,
    /// the same rule `class_names` applies to class names.
    pub fn node(&self, classes: &SpinnerClasses) -> SpinnerNode {
        let class = class_names([
            self.class_name.as_deref(),
            Some(classes.class_for(self.variant())),
        ]);

        SpinnerNode {
            class,
            width: non_empty(self.width.as_deref()),
            height: non_empty(self.height.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_owned)
}

/// The two mutually exclusive visual treatments of a spinner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpinnerVariant {
    #[default]
    Normal,
    Inverted,
}

impl SpinnerVariant {
    pub const fn from_invert(invert: bool) -> Self {
        if invert { Self::Inverted } else { Self::Normal }
    }
}

/// Class identifiers the host stylesheet defines for each variant.
///
/// Hosts whose stylesheet names the variants differently (CSS modules,
/// prefixed builds) can hand their own names to every spinner below a given
/// owner with [`provide_spinner_classes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerClasses {
    pub normal: String,
    pub inverted: String,
}

impl SpinnerClasses {
    #[must_use]
    pub fn new(normal: impl Into<String>, inverted: impl Into<String>) -> Self {
        Self {
            normal: normal.into(),
            inverted: inverted.into(),
        }
    }

    pub fn class_for(&self, variant: SpinnerVariant) -> &str {
        match variant {
            SpinnerVariant::Normal => &self.normal,
            SpinnerVariant::Inverted => &self.inverted,
        }
    }
}

impl Default for SpinnerClasses {
    fn default() -> Self {
        Self::new(NORMAL_CLASS, INVERTED_CLASS)
    }
}

/// Makes `classes` the variant class names for spinners rendered under the
/// current reactive owner.
pub fn provide_spinner_classes(classes: SpinnerClasses) {
    provide_context(classes);
}

/// A resolved spinner: what ends up on the rendered `<div>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerNode {
    pub class: String,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl SpinnerNode {
    /// Inline style for the set dimensions, e.g. `width: 24px; height: 24px;`.
    ///
    /// `None` when neither dimension is set, so no `style` attribute is
    /// emitted and sizing is left to the stylesheet.
    pub fn style(&self) -> Option<String> {
        let declarations: Vec<String> = [("width", &self.width), ("height", &self.height)]
            .into_iter()
            .filter_map(|(property, value)| {
                value.as_deref().map(|value| format!("{property}: {value};"))
            })
            .collect();

        (!declarations.is_empty()).then(|| declarations.join(" "))
    }
}

/// Renders a loading spinner for `config`.
///
/// Variant class names come from the surrounding context when a host has
/// called [`provide_spinner_classes`], and fall back to
/// [`SpinnerClasses::default`] otherwise.
pub fn component(config: SpinnerConfig) -> impl IntoView {
    let classes = use_context::<SpinnerClasses>().unwrap_or_default();
    let node = config.node(&classes);
    let style = node.style();

    div().class(node.class).attr("style", style)
}

/// View-macro entry point for [`component`].
///
/// ```ignore
/// view! { <Spinner width="24px" height="24px" invert=true class="mt-2"/> }
/// ```
#[component]
pub fn Spinner(
    #[prop(into, optional)] width: Option<String>,
    #[prop(into, optional)] height: Option<String>,
    #[prop(optional)] invert: Option<bool>,
    #[prop(into, optional)] class: Option<String>,
) -> impl IntoView {
    component(SpinnerConfig {
        width,
        height,
        invert,
        class_name: class,
    })
}
