// SPDX-License-Identifier: MIT OR Apache-2.0

use storefront_core::locale::Language;
use yew::prelude::*;

fn apply_language(language: Language) {
    let root = gloo_utils::document_element();
    for (name, value) in [("lang", language.code()), ("dir", language.direction())] {
        if let Err(e) = root.set_attribute(name, value) {
            log::warn!("failed to set {name}={value}: {e:?}");
        }
    }
}

/// Switches the page between Arabic (RTL) and English (LTR).
#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let language = use_state_eq(Language::default);

    let onclick = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| {
            let next = language.toggled();
            apply_language(next);
            language.set(next);
        })
    };

    html! {
        <button id="langToggle" class="lang-toggle" {onclick}>
            { language.toggle_label() }
        </button>
    }
}
