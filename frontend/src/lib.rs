//! WebAssembly entry point for the spinner demo.
//!
//! The server renders the demo page (one row per spinner configuration:
//! default, inverted, sized, and inverted with a caller class) together with
//! the router's 404 fallback. This crate hydrates that markup so client-side
//! route changes go through `app::component` instead of a full reload.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the spinner demo in the browser.
///
/// Spinners carry no reactive state, so hydration only attaches the router;
/// console logging and the panic hook are installed first so hydration
/// mismatches show up in the browser console.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating spinner demo");
    leptos::mount::hydrate_body(component);
}

