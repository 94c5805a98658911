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

//! Framework-agnostic state for the storefront UI.
//!
//! Nothing in here touches the browser, so every module builds and tests on
//! the host. `storefront-ui` supplies the DOM and timer implementations.

pub mod accordion;
pub mod carousel;
pub mod catalog;
pub mod forms;
pub mod locale;
pub mod navigation;
pub mod notifications;
pub mod theme;

pub use carousel::{ActiveMarker, Carousel, CarouselState, Scheduler};
pub use theme::{ResolvedTheme, ThemePreference};

/// Attribute marking elements that animate in when scrolled into view.
pub const REVEAL_ATTRIBUTE: &str = "data-aos";

/// Class added once a revealed element has intersected the viewport.
pub const REVEAL_CLASS: &str = "aos-animate";

/// Bottom inset so elements reveal slightly after entering the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_true_and_one() {
        assert!(truthy(Some("TRUE")));
        assert!(truthy(Some("1")));
        assert!(!truthy(Some("yes")));
        assert!(!truthy(None));
    }
}
