// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the newsletter, contact and account forms.
//
// Verifies validation feedback arrives as a toast and that the account
// panes swap when their links are clicked.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, query, settle, toast_text, type_into};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::prelude::*;

use storefront_ui::components::forms::{AccountForms, ContactForm, NewsletterSignup};
use storefront_ui::components::notifications::NotificationHost;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn newsletter_thanks_and_resets() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <NotificationHost><NewsletterSignup /></NotificationHost> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    let input = query(&mount, "#newsletterForm input[type='email']");
    type_into(&input, "reader@example.com");
    settle().await;
    click(&query(&mount, "#newsletterForm button[type='submit']"));
    settle().await;

    assert!(toast_text(&mount).contains("reader@example.com"));
    let value = input.unchecked_ref::<web_sys::HtmlInputElement>().value();
    assert_eq!(value, "", "form should reset after a successful signup");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn contact_form_requires_every_field() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <NotificationHost><ContactForm /></NotificationHost> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    type_into(&query(&mount, "#contactForm input[name='name']"), "Layla");
    settle().await;
    click(&query(&mount, "#contactForm button[type='submit']"));
    settle().await;

    assert!(toast_text(&mount).contains("الرجاء ملء جميع الحقول المطلوبة."));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn account_panes_swap_and_register_checks_passwords() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <NotificationHost><AccountForms /></NotificationHost> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert!(mount.query_selector("#loginForm").unwrap().is_some());
    assert!(mount.query_selector("#registerForm").unwrap().is_none());

    click(&query(&mount, "#showRegister"));
    settle().await;
    assert!(mount.query_selector("#loginForm").unwrap().is_none());
    assert!(mount.query_selector("#registerForm").unwrap().is_some());

    type_into(&query(&mount, "#registerForm input[name='password']"), "secret1");
    type_into(&query(&mount, "#registerForm input[name='confirm-password']"), "secret2");
    settle().await;
    click(&query(&mount, "#registerForm button[type='submit']"));
    settle().await;
    assert!(toast_text(&mount).contains("كلمات المرور غير متطابقة!"));

    click(&query(&mount, "#showLogin"));
    settle().await;
    assert!(mount.query_selector("#loginForm").unwrap().is_some());

    cleanup(&mount);
}
