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

//! Newsletter, contact and account forms.
//!
//! Submissions stay in the browser: the form is validated, the visitor
//! gets a toast, and a successful form is cleared.

use storefront_core::forms::{self, AccountPane, FormError};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::context::{notify_info, Notifier};

fn input_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| state.set(e.target_unchecked_into::<HtmlInputElement>().value()))
}

fn textarea_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    })
}

fn report<T: Into<String>>(notifier: Option<&Notifier>, result: Result<T, FormError>) -> bool {
    match result {
        Ok(message) => {
            notify_info(notifier, message);
            true
        }
        Err(err) => {
            log::debug!("form rejected: {err}");
            notify_info(notifier, err.user_message());
            false
        }
    }
}

#[function_component(NewsletterSignup)]
pub fn newsletter_signup() -> Html {
    let notifier = use_context::<Notifier>();
    let email = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = forms::NewsletterForm {
                email: (*email).clone(),
            };
            if report(notifier.as_ref(), form.submit()) {
                email.set(String::new());
            }
        })
    };

    html! {
        <form id="newsletterForm" class="newsletter-form" {onsubmit}>
            <input
                type="email"
                placeholder="بريدك الإلكتروني"
                value={(*email).clone()}
                oninput={input_setter(&email)}
                required=true
            />
            <button type="submit" class="btn btn-primary">{ "اشترك" }</button>
        </form>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let notifier = use_context::<Notifier>();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let onsubmit = {
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = forms::ContactForm {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            if report(notifier.as_ref(), form.submit()) {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
        })
    };

    html! {
        <form id="contactForm" class="contact-form" {onsubmit}>
            <input type="text" name="name" placeholder="الاسم"
                value={(*name).clone()} oninput={input_setter(&name)} />
            <input type="email" name="email" placeholder="البريد الإلكتروني"
                value={(*email).clone()} oninput={input_setter(&email)} />
            <textarea name="message" placeholder="رسالتك"
                value={(*message).clone()} oninput={textarea_setter(&message)} />
            <button type="submit" class="btn btn-primary">{ "إرسال" }</button>
        </form>
    }
}

#[function_component(LoginForm)]
fn login_form() -> Html {
    let notifier = use_context::<Notifier>();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let (email, password) = (email.clone(), password.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = forms::LoginForm {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            report(notifier.as_ref(), form.submit());
        })
    };

    html! {
        <form id="loginForm" class="auth-form" {onsubmit}>
            <input type="email" name="email" placeholder="البريد الإلكتروني"
                value={(*email).clone()} oninput={input_setter(&email)} />
            <input type="password" name="password" placeholder="كلمة المرور"
                value={(*password).clone()} oninput={input_setter(&password)} />
            <button type="submit" class="btn btn-primary">{ "تسجيل الدخول" }</button>
        </form>
    }
}

#[function_component(RegisterForm)]
fn register_form() -> Html {
    let notifier = use_context::<Notifier>();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);

    let onsubmit = {
        let (name, email, password, confirm) =
            (name.clone(), email.clone(), password.clone(), confirm.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = forms::RegisterForm {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm).clone(),
            };
            report(notifier.as_ref(), form.submit());
        })
    };

    html! {
        <form id="registerForm" class="auth-form" {onsubmit}>
            <input type="text" name="name" placeholder="الاسم"
                value={(*name).clone()} oninput={input_setter(&name)} />
            <input type="email" name="email" placeholder="البريد الإلكتروني"
                value={(*email).clone()} oninput={input_setter(&email)} />
            <input type="password" name="password" placeholder="كلمة المرور"
                value={(*password).clone()} oninput={input_setter(&password)} />
            <input type="password" name="confirm-password" placeholder="تأكيد كلمة المرور"
                value={(*confirm).clone()} oninput={input_setter(&confirm)} />
            <button type="submit" class="btn btn-primary">{ "إنشاء حساب" }</button>
        </form>
    }
}

/// Login and registration panes; only one is shown at a time.
#[function_component(AccountForms)]
pub fn account_forms() -> Html {
    let pane = use_state_eq(AccountPane::default);

    let show = |target: AccountPane| {
        let pane = pane.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            pane.set(target);
        })
    };

    html! {
        <div class="auth-container">
            if *pane == AccountPane::Login {
                <div class="auth-pane">
                    <h2>{ "تسجيل الدخول" }</h2>
                    <LoginForm />
                    <p class="auth-switch">
                        { "ليس لديك حساب؟ " }
                        <a href="#" id="showRegister" onclick={show(AccountPane::Register)}>{ "أنشئ حساباً" }</a>
                    </p>
                </div>
            } else {
                <div class="auth-pane">
                    <h2>{ "إنشاء حساب" }</h2>
                    <RegisterForm />
                    <p class="auth-switch">
                        { "لديك حساب بالفعل؟ " }
                        <a href="#" id="showLogin" onclick={show(AccountPane::Login)}>{ "سجّل الدخول" }</a>
                    </p>
                </div>
            }
        </div>
    }
}
