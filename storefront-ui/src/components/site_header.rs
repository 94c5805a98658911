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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use gloo_events::EventListener;
use storefront_core::navigation::{HeaderStyle, MobileMenu};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::language_toggle::LanguageToggle;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::platform::scroll_offset;
use crate::routing::Route;

/// Fixed site header: logo, navigation drawer, theme and language controls.
/// Compacts itself once the page has scrolled.
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu = use_state_eq(MobileMenu::default);
    let style = use_state_eq(|| HeaderStyle::for_scroll_offset(scroll_offset()));

    {
        let style = style.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo_utils::window(), "scroll", move |_| {
                style.set(HeaderStyle::for_scroll_offset(scroll_offset()));
            });
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };
    let close_on_click = close_menu.reform(|_: MouseEvent| ());

    html! {
        <header id="header" class="header" style={style.inline_style()}>
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes="logo">{ "لمسة ذهبية" }</Link<Route>>
                <nav id="nav" class={classes!("nav", menu.class())}>
                    <ul class="nav-links">
                        <li onclick={close_on_click.clone()}>
                            <Link<Route> to={Route::Home}>{ "الرئيسية" }</Link<Route>>
                        </li>
                        <li onclick={close_on_click.clone()}>
                            <Link<Route> to={Route::Products}>{ "المنتجات" }</Link<Route>>
                        </li>
                        <li>
                            <AnchorLink href="#testimonials" on_follow={close_menu.clone()}>
                                { "آراء العملاء" }
                            </AnchorLink>
                        </li>
                        <li onclick={close_on_click.clone()}>
                            <Link<Route> to={Route::Contact}>{ "تواصل معنا" }</Link<Route>>
                        </li>
                        <li onclick={close_on_click}>
                            <Link<Route> to={Route::Account}>{ "حسابي" }</Link<Route>>
                        </li>
                    </ul>
                </nav>
                <div class="header-actions">
                    <ThemeSwitcher />
                    <LanguageToggle />
                    <button id="menuToggle" class={classes!("menu-toggle", menu.class())} onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
