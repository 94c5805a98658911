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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Browser primitives shared by the components.
//!
//! - **`IntervalScheduler`**: the carousel timer, backed by `setInterval`
//! - small accessors for scroll position, `localStorage` and `matchMedia`
//!
//! Everything degrades to a logged no-op when the API is missing.

use gloo_timers::callback::Interval;
use storefront_core::theme::DARK_SCHEME_QUERY;
use storefront_core::Scheduler;
use web_sys::{MediaQueryList, ScrollBehavior, ScrollToOptions, Storage};

/// Repeating carousel timer.
///
/// The handle is a `gloo_timers` `Interval`, which clears itself on drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn repeat(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

/// Current vertical scroll position of the page.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn dark_scheme_query() -> Option<MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

pub fn system_prefers_dark() -> bool {
    dark_scheme_query().is_some_and(|q| q.matches())
}
