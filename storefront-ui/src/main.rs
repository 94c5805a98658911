/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use storefront_ui::app::AppRoot;
use storefront_ui::constants::debug_logging;

fn main() {
    let level = if cfg!(feature = "debugAssertions") || debug_logging() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger already initialised: {e}").into());
    }
    console_error_panic_hook::set_once();

    log::info!("starting storefront");
    yew::Renderer::<AppRoot>::new().render();
}
