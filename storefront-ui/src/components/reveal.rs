// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scroll-triggered reveal.
//!
//! Content wrapped in [`Reveal`] carries a `data-aos` animation name and
//! gains the `aos-animate` class the first time it scrolls into view. The
//! stylesheet does the actual animation.

use js_sys::Array;
use storefront_core::{REVEAL_CLASS, REVEAL_ROOT_MARGIN};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::constants::reveal_threshold;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watch `element` until it intersects, then call `on_visible` once.
/// The closure must live as long as the observer.
fn observe_once(
    element: &Element,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_visible();
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal_threshold()));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(AttrValue::Static("fade-up"))]
    pub animation: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let observed = node.cast::<Element>().and_then(|element| {
                let revealed = revealed.clone();
                observe_once(&element, move || revealed.set(true))
            });
            if observed.is_none() {
                // Nothing to watch with: show the content rather than hide it forever.
                revealed.set(true);
            }
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        });
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), revealed.then_some(REVEAL_CLASS))}
            data-aos={props.animation.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
