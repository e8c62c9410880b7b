#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod portfolio;
pub mod profile;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).expect("should be able to initialize console logging");
    leptos::mount::hydrate_body(App);
}
