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

//! Toast notifications.
//!
//! A toast enters, stays visible for a kind-specific time, plays a 500 ms
//! exit animation, and is then removed. [`ToastQueue`] only tracks the
//! phases; the UI owns the timers.

/// Length of the exit animation before a toast leaves the DOM.
pub const EXIT_ANIMATION_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// "Added to cart", top-right.
    Cart,
    /// Generic confirmation, bottom-centre.
    Info,
}

impl ToastKind {
    pub fn visible_ms(self) -> u32 {
        match self {
            Self::Cart => 3000,
            Self::Info => 2000,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Cart => "toast toast-cart",
            Self::Info => "toast toast-info",
        }
    }
}

pub fn cart_message(product_name: &str) -> String {
    format!("تمت إضافة {product_name} إلى السلة")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    /// Start the exit animation. Returns false for unknown ids.
    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
