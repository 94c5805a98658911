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

//! Client-side form checks. Nothing is sent anywhere; a successful
//! submission only produces a confirmation message.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl FormError {
    /// Text shown to the visitor.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::MissingFields => "الرجاء ملء جميع الحقول المطلوبة.",
            Self::PasswordMismatch => "كلمات المرور غير متطابقة!",
        }
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn submit(&self) -> Result<String, FormError> {
        if !filled(&self.email) {
            return Err(FormError::MissingFields);
        }
        Ok(format!(
            "شكراً لاشتراكك! سنرسل لك آخر العروض على: {}",
            self.email.trim()
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn submit(&self) -> Result<&'static str, FormError> {
        if [&self.name, &self.email, &self.message]
            .into_iter()
            .all(|field| filled(field))
        {
            Ok("شكراً لتواصلك معنا! سنرد عليك في أقرب وقت.")
        } else {
            Err(FormError::MissingFields)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn submit(&self) -> Result<&'static str, FormError> {
        Ok("تم تسجيل الدخول بنجاح!")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn submit(&self) -> Result<&'static str, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok("تم إنشاء الحساب بنجاح!")
    }
}

/// Which of the two account panes is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountPane {
    #[default]
    Login,
    Register,
}
