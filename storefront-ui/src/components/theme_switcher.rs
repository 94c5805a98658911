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

//! Theme provider and the dark / light / device dropdown.

use gloo_events::EventListener;
use storefront_core::{ResolvedTheme, ThemePreference};
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryListEvent, Node};
use yew::prelude::*;

use crate::context::{load_theme_from_storage, save_theme_to_storage, ThemeCtx};
use crate::platform::{dark_scheme_query, system_prefers_dark};

fn apply_theme(theme: ResolvedTheme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    for class in ResolvedTheme::ALL_CLASSES {
        let _ = classes.remove_1(class);
    }
    if let Err(e) = classes.add_1(theme.css_class()) {
        log::warn!("failed to apply theme class: {e:?}");
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the theme preference, keeps the body class in sync with it and with
/// the system colour scheme, and persists every change.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let preference = use_state_eq(load_theme_from_storage);
    let system_dark = use_state_eq(system_prefers_dark);

    use_effect_with(
        (*preference, *system_dark),
        |(preference, system_dark)| {
            let resolved = preference.resolve(*system_dark);
            log::debug!("applying theme {preference} as {}", resolved.css_class());
            apply_theme(resolved);
            save_theme_to_storage(*preference);
        },
    );

    {
        let system_dark = system_dark.clone();
        use_effect_with((), move |_| {
            let listener = dark_scheme_query().map(|query| {
                EventListener::new(&query, "change", move |event| {
                    let matches = event
                        .dyn_ref::<MediaQueryListEvent>()
                        .map(MediaQueryListEvent::matches)
                        .unwrap_or_else(system_prefers_dark);
                    system_dark.set(matches);
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<ThemeCtx> context={preference}>
            { for props.children.iter() }
        </ContextProvider<ThemeCtx>>
    }
}

/// Header dropdown for choosing the theme.
#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    let theme = use_context::<ThemeCtx>();
    let open = use_state_eq(|| false);
    let root = use_node_ref();

    // Any click outside the switcher closes the dropdown.
    {
        let open = open.clone();
        let root = root.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo_utils::document(), "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = match (root.cast::<Node>(), target) {
                    (Some(root), Some(target)) => root.contains(Some(&target)),
                    _ => false,
                };
                if !inside {
                    open.set(false);
                }
            });
            move || drop(listener)
        });
    }

    let Some(theme) = theme else {
        log::warn!("ThemeSwitcher rendered outside ThemeProvider");
        return html! {};
    };
    let current = *theme;

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="theme-switcher" ref={root}>
            <button id="themeMainBtn" class="theme-main-btn" onclick={toggle}>
                <span id="currentThemeIcon">{ current.icon() }</span>
            </button>
            <div id="themeDropdown" class={classes!("theme-dropdown", open.then_some("active"))}>
                { for ThemePreference::ALL.into_iter().map(|option| {
                    let onclick = {
                        let theme = theme.clone();
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| {
                            theme.set(option);
                            open.set(false);
                        })
                    };
                    html! {
                        <button
                            class={classes!("theme-option", (option == current).then_some("active"))}
                            data-theme={option.as_str()}
                            {onclick}
                        >
                            <span class="theme-option-icon">{ option.icon() }</span>
                            <span class="theme-option-label">{ theme_label(option) }</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn theme_label(option: ThemePreference) -> &'static str {
    match option {
        ThemePreference::Dark => "داكن",
        ThemePreference::Light => "فاتح",
        ThemePreference::Device => "حسب الجهاز",
    }
}
