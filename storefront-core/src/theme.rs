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

//! Colour theme preference.
//!
//! The user picks dark, light, or "device" (follow `prefers-color-scheme`).
//! Only the preference is persisted; the resolved theme is recomputed from
//! the system setting whenever the preference is `Device`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// localStorage key holding the saved preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query used to detect the system colour scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Device,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Dark,
    Light,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme preference: {0:?}")]
pub struct ParseThemeError(pub String);

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Dark, Self::Light, Self::Device];

    /// Interpret a stored value. Missing or unrecognised values mean
    /// "follow the device".
    pub fn from_storage(saved: Option<&str>) -> Self {
        saved.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Device => "device",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
            Self::Device => "💻",
        }
    }

    pub fn follows_system(self) -> bool {
        self == Self::Device
    }

    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Dark => ResolvedTheme::Dark,
            Self::Light => ResolvedTheme::Light,
            Self::Device if system_prefers_dark => ResolvedTheme::Dark,
            Self::Device => ResolvedTheme::Light,
        }
    }
}

impl ResolvedTheme {
    /// Body class carrying the theme.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "dark-mode",
            Self::Light => "light-mode",
        }
    }

    /// Every class this type may put on the body, for clearing.
    pub const ALL_CLASSES: [&'static str; 2] = ["dark-mode", "light-mode"];
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "device" => Ok(Self::Device),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_unknown_storage_follows_device() {
        assert_eq!(ThemePreference::from_storage(None), ThemePreference::Device);
        assert_eq!(
            ThemePreference::from_storage(Some("sepia")),
            ThemePreference::Device
        );
        assert_eq!(
            ThemePreference::from_storage(Some("light")),
            ThemePreference::Light
        );
    }

    #[test]
    fn device_resolves_from_system_setting() {
        assert_eq!(ThemePreference::Device.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::Device.resolve(false), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn storage_value_round_trips_through_display() {
        for pref in ThemePreference::ALL {
            assert_eq!(pref.to_string().parse::<ThemePreference>(), Ok(pref));
        }
        assert_eq!(
            "blue".parse::<ThemePreference>(),
            Err(ParseThemeError("blue".into()))
        );
    }

    #[test]
    fn serde_uses_storage_names() {
        let json = serde_json::to_string(&ThemePreference::Device).unwrap();
        assert_eq!(json, "\"device\"");
    }
}
