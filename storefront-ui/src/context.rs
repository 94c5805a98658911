// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Yew's `ContextProvider`.

use storefront_core::catalog::Wishlist;
use storefront_core::notifications::ToastKind;
use storefront_core::theme::THEME_STORAGE_KEY;
use storefront_core::ThemePreference;
use yew::prelude::*;

use crate::platform::local_storage;

/// Selected theme preference. Setting it re-applies and persists the theme
/// (see `ThemeProvider`).
pub type ThemeCtx = UseStateHandle<ThemePreference>;

/// Products hearted during this visit.
pub type WishlistCtx = UseStateHandle<Wishlist>;

/// Handle for raising toast notifications from anywhere in the tree.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    notify: Callback<(ToastKind, String)>,
}

impl Notifier {
    pub fn new(notify: Callback<(ToastKind, String)>) -> Self {
        Self { notify }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify.emit((ToastKind::Info, message.into()));
    }

    pub fn cart(&self, message: impl Into<String>) {
        self.notify.emit((ToastKind::Cart, message.into()));
    }
}

/// Read the theme preference from `window.localStorage` (if present).
pub fn load_theme_from_storage() -> ThemePreference {
    let saved = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemePreference::from_storage(saved.as_deref())
}

/// Persist the theme preference so that it survives page reloads.
pub fn save_theme_to_storage(preference: ThemePreference) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, preference.as_str()) {
            log::warn!("failed to save theme preference: {e:?}");
        }
    }
}

/// Show `message` as an info toast, or just log it when no
/// `NotificationHost` is mounted.
pub fn notify_info(notifier: Option<&Notifier>, message: impl Into<String>) {
    let message = message.into();
    match notifier {
        Some(notifier) => notifier.info(message),
        None => log::info!("{message}"),
    }
}
