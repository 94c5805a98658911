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

//! Application route definitions.
//!
//! Shared by the app root and the integration tests.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::account::AccountPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::product_details::ProductDetailsPage;
use crate::pages::products::ProductsPage;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
    #[at("/products/:id")]
    Product { id: String },
    #[at("/contact")]
    Contact,
    #[at("/account")]
    Account,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Products => html! { <ProductsPage /> },
        Route::Product { id } => html! { <ProductDetailsPage {id} /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Account => html! { <AccountPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
