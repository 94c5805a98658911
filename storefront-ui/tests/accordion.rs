// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the Accordion.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{active_indices, cleanup, click, create_mount_point, query_all, settle};
use wasm_bindgen_test::*;
use yew::prelude::*;

use storefront_ui::components::accordion::{Accordion, AccordionEntry};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    let entries = (0..3)
        .map(|i| AccordionEntry {
            title: format!("Question {i}"),
            body: format!("Answer {i}"),
        })
        .collect::<Vec<_>>();
    html! { <Accordion {entries} /> }
}

#[wasm_bindgen_test]
async fn at_most_one_section_open() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert!(active_indices(&mount, ".accordion-item").is_empty());

    let headers = query_all(&mount, ".accordion-header");
    click(&headers[1]);
    settle().await;
    assert_eq!(active_indices(&mount, ".accordion-item"), vec![1]);

    click(&headers[2]);
    settle().await;
    assert_eq!(active_indices(&mount, ".accordion-item"), vec![2]);

    click(&headers[2]);
    settle().await;
    assert!(active_indices(&mount, ".accordion-item").is_empty());

    cleanup(&mount);
}
