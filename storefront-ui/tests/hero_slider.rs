// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the HeroSlider.
//
// Verifies that exactly one slide and one dot are active at all times and
// that the arrows, dots and auto-advance timer move them together.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{active_indices, cleanup, click, create_mount_point, query, query_all, settle};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use storefront_ui::components::hero_slider::{HeroSlide, HeroSlider, HeroSliderProps};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn slides(n: usize) -> Vec<HeroSlide> {
    (0..n)
        .map(|i| HeroSlide {
            title: format!("Slide {i}"),
            subtitle: String::new(),
            image: format!("/img/{i}.jpg"),
            cta_label: "Shop".into(),
            cta_href: "/products".into(),
        })
        .collect()
}

fn mount_slider(count: usize, interval_ms: u32) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<HeroSlider>::with_root_and_props(
        mount.clone(),
        HeroSliderProps {
            slides: slides(count),
            interval_ms,
        },
    )
    .render();
    mount
}

fn assert_active(mount: &web_sys::Element, index: usize) {
    assert_eq!(active_indices(mount, ".slide"), vec![index], "active slide");
    assert_eq!(active_indices(mount, ".dot"), vec![index], "active dot");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn first_slide_and_dot_start_active() {
    let mount = mount_slider(3, 60_000);
    settle().await;

    assert_eq!(query_all(&mount, ".slide").len(), 3);
    assert_eq!(query_all(&mount, "#sliderDots .dot").len(), 3);
    assert_active(&mount, 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn arrows_step_and_wrap() {
    let mount = mount_slider(3, 60_000);
    settle().await;

    click(&query(&mount, "#nextSlide"));
    settle().await;
    assert_active(&mount, 1);

    click(&query(&mount, "#prevSlide"));
    settle().await;
    click(&query(&mount, "#prevSlide"));
    settle().await;
    assert_active(&mount, 2);

    click(&query(&mount, "#nextSlide"));
    settle().await;
    assert_active(&mount, 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn dot_click_jumps_to_slide() {
    let mount = mount_slider(4, 60_000);
    settle().await;

    click(&query_all(&mount, ".dot")[2]);
    settle().await;
    assert_active(&mount, 2);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn timer_advances_slides() {
    // More slides than ticks in the wait, so an advance never wraps back to 0.
    let mount = mount_slider(30, 20);
    settle().await;

    sleep(Duration::from_millis(200)).await;
    let active = active_indices(&mount, ".slide");
    assert_eq!(active.len(), 1, "exactly one slide active");
    assert_ne!(active, vec![0], "timer should have advanced");
    assert_eq!(active_indices(&mount, ".dot"), active);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn resizing_slides_rebuilds_dots_and_navigation() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let count = use_state(|| 2);
        let grow = {
            let count = count.clone();
            Callback::from(move |_: MouseEvent| count.set(4))
        };
        html! {
            <>
                <button id="grow" onclick={grow}>{ "grow" }</button>
                <HeroSlider slides={slides(*count)} interval_ms={60_000} />
            </>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;
    click(&query(&mount, "#nextSlide"));
    settle().await;
    assert_active(&mount, 1);

    click(&query(&mount, "#grow"));
    settle().await;
    assert_eq!(query_all(&mount, ".dot").len(), 4);
    assert_active(&mount, 0);

    click(&query_all(&mount, ".dot")[3]);
    settle().await;
    assert_active(&mount, 3);

    click(&query(&mount, "#nextSlide"));
    settle().await;
    assert_active(&mount, 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn empty_slider_renders_no_controls() {
    let mount = mount_slider(0, 40);
    settle().await;
    sleep(Duration::from_millis(60)).await;

    assert!(query_all(&mount, ".slide").is_empty());
    assert!(mount.query_selector("#nextSlide").unwrap().is_none());
    assert!(mount.query_selector("#sliderDots").unwrap().is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn slide_content_is_rendered() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <HeroSlider slides={slides(2)} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Slide 0"));
    assert!(text.contains("Slide 1"));

    cleanup(&mount);
}
