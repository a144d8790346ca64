//! This module serves as a container for the UI components of the crate.
//!
//! `spinner` is the reusable loading indicator; `error_template` backs the
//! demo app's fallback route.

pub mod error_template;
pub mod spinner;
