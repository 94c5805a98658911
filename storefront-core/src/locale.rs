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

//! Page language and writing direction.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::Arabic => Self::English,
            Self::English => Self::Arabic,
        }
    }

    /// Value for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Value for the `dir` attribute.
    pub fn direction(self) -> &'static str {
        match self {
            Self::Arabic => "rtl",
            Self::English => "ltr",
        }
    }

    /// Label of the toggle button: it names the language you switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Arabic => "EN",
            Self::English => "AR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_code_direction_and_label() {
        let lang = Language::default();
        assert_eq!((lang.code(), lang.direction(), lang.toggle_label()), ("ar", "rtl", "EN"));
        let lang = lang.toggled();
        assert_eq!((lang.code(), lang.direction(), lang.toggle_label()), ("en", "ltr", "AR"));
        assert_eq!(lang.toggled(), Language::Arabic);
    }
}
