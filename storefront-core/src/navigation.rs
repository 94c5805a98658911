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

//! Header, menu, and scroll geometry.

/// Scroll offset past which the header switches to its compact style.
pub const COMPACT_HEADER_AFTER_PX: f64 = 100.0;

/// Height reserved for the fixed header when scrolling to an anchor.
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 100.0;

/// Hero background moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Expanded,
    Compact,
}

impl HeaderStyle {
    pub fn for_scroll_offset(offset: f64) -> Self {
        if offset > COMPACT_HEADER_AFTER_PX {
            Self::Compact
        } else {
            Self::Expanded
        }
    }

    pub fn padding(self) -> &'static str {
        match self {
            Self::Expanded => "20px 0",
            Self::Compact => "15px 0",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Expanded => "none",
            Self::Compact => "0 5px 20px rgba(0, 0, 0, 0.3)",
        }
    }

    pub fn inline_style(self) -> String {
        format!("padding: {}; box-shadow: {};", self.padding(), self.box_shadow())
    }
}

pub fn parallax_offset(scroll_offset: f64) -> f64 {
    scroll_offset * PARALLAX_FACTOR
}

/// Returns the element id an in-page link points at, or `None` for links
/// that should keep their default behaviour (`#`, empty, or off-page).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document Y coordinate to scroll to so the target sits below the header.
pub fn anchor_scroll_top(target_viewport_top: f64, page_offset: f64) -> f64 {
    target_viewport_top + page_offset - ANCHOR_HEADER_OFFSET_PX
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Class added to both the drawer and the burger button when open.
    pub fn class(self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}
