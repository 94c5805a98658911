// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for storefront-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, and small
// DOM query helpers so that individual test files stay focused on
// assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let Yew flush its scheduler, including messages sent from `rendered`.
pub async fn settle() {
    sleep(Duration::ZERO).await;
    sleep(Duration::from_millis(10)).await;
}

pub fn query(mount: &Element, selector: &str) -> Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn query_all(mount: &Element, selector: &str) -> Vec<Element> {
    let list = mount.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect()
}

pub fn click(element: &Element) {
    element.unchecked_ref::<HtmlElement>().click();
}

/// Indices of the elements matching `selector` that carry the `active` class.
pub fn active_indices(mount: &Element, selector: &str) -> Vec<usize> {
    query_all(mount, selector)
        .iter()
        .enumerate()
        .filter(|(_, el)| el.class_list().contains("active"))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with the given carousel periods and a
/// loading screen that disappears immediately.
pub fn inject_app_config(hero_interval_ms: u32, testimonial_interval_ms: u32) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("heroIntervalMs", &JsValue::from(hero_interval_ms));
    set("testimonialIntervalMs", &JsValue::from(testimonial_interval_ms));
    set("loadingScreenMs", &JsValue::from(0));
    set("revealThreshold", &JsValue::from(0.1));
    set("debugLogging", &"false".into());

    let frozen = js_sys::Object::freeze(&config);
    js_sys::Reflect::set(&gloo_utils::window(), &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so later tests see the defaults.
pub fn remove_app_config() {
    js_sys::Reflect::delete_property(&gloo_utils::window().into(), &"__APP_CONFIG".into()).ok();
}

pub fn clear_local_storage() {
    if let Ok(Some(storage)) = gloo_utils::window().local_storage() {
        storage.clear().ok();
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

/// Dispatch a bubbling event so Yew's delegated listeners see it.
pub fn dispatch(element: &Element, event: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict(event, &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

/// Type `value` into an `<input>` and fire `input`.
pub fn type_into(element: &Element, value: &str) {
    element
        .unchecked_ref::<web_sys::HtmlInputElement>()
        .set_value(value);
    dispatch(element, "input");
}

/// Choose `value` in a `<select>` and fire `change`.
pub fn select_value(element: &Element, value: &str) {
    element
        .unchecked_ref::<web_sys::HtmlSelectElement>()
        .set_value(value);
    dispatch(element, "change");
}

/// Text of the toast stack, if any toast is showing.
pub fn toast_text(mount: &Element) -> String {
    mount
        .query_selector(".toast-stack")
        .unwrap()
        .and_then(|stack| stack.text_content())
        .unwrap_or_default()
}

/// Dispatch a bubbling, cancelable click and report whether a handler
/// called `preventDefault`.
pub fn click_prevented(element: &Element) -> bool {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    !element.dispatch_event(&event).unwrap()
}
