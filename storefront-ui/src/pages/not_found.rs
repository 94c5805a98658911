// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routing::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "الصفحة المطلوبة غير موجودة." }</p>
            <Link<Route> to={Route::Home}>{ "العودة إلى الرئيسية" }</Link<Route>>
        </main>
    }
}
