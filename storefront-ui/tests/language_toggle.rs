// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the LanguageToggle.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, query, settle};
use wasm_bindgen_test::*;

use storefront_ui::components::language_toggle::LanguageToggle;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn toggles_lang_and_direction() {
    let mount = create_mount_point();
    yew::Renderer::<LanguageToggle>::with_root(mount.clone()).render();
    settle().await;

    let button = query(&mount, "#langToggle");
    assert_eq!(button.text_content().unwrap(), "EN");

    click(&button);
    settle().await;
    let root = gloo_utils::document_element();
    assert_eq!(root.get_attribute("lang").as_deref(), Some("en"));
    assert_eq!(root.get_attribute("dir").as_deref(), Some("ltr"));
    assert_eq!(query(&mount, "#langToggle").text_content().unwrap(), "AR");

    click(&query(&mount, "#langToggle"));
    settle().await;
    assert_eq!(root.get_attribute("lang").as_deref(), Some("ar"));
    assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));

    cleanup(&mount);
}
