pub mod domain;
pub mod projections;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Wires the price-list page: logging, panic hook, task executor and the
/// document click subscription. The markup itself is rendered by the server.
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    shared::click_delegation::init_executor();

    let config = shared::config::load_config();
    if let Err(e) = shared::click_delegation::install(config) {
        log::error!("failed to install price handlers: {:?}", e);
    }
}
