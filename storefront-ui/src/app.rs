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

use storefront_core::catalog::Wishlist;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::loading_screen::LoadingScreen;
use crate::components::notifications::NotificationHost;
use crate::components::site_header::SiteHeader;
use crate::components::theme_switcher::ThemeProvider;
use crate::context::WishlistCtx;
use crate::routing::{switch, Route};

#[derive(Properties, PartialEq)]
struct WishlistProviderProps {
    children: Children,
}

#[function_component(WishlistProvider)]
fn wishlist_provider(props: &WishlistProviderProps) -> Html {
    let wishlist = use_state(Wishlist::default);
    html! {
        <ContextProvider<WishlistCtx> context={wishlist}>
            { for props.children.iter() }
        </ContextProvider<WishlistCtx>>
    }
}

#[function_component(AppRoot)]
pub fn app_root() -> Html {
    html! {
        <ThemeProvider>
            <NotificationHost>
                <WishlistProvider>
                    <BrowserRouter>
                        <LoadingScreen />
                        <SiteHeader />
                        <Switch<Route> render={switch} />
                        <Footer />
                    </BrowserRouter>
                </WishlistProvider>
            </NotificationHost>
        </ThemeProvider>
    }
}
