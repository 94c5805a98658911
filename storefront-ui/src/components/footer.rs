// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::forms::NewsletterSignup;
use crate::routing::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-section">
                    <h3>{ "المتجر" }</h3>
                    <p>{ "منتجات مختارة بعناية، تصلك أينما كنت." }</p>
                </div>
                <div class="footer-section">
                    <h4>{ "روابط" }</h4>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{ "الرئيسية" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Products}>{ "المنتجات" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{ "اتصل بنا" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Account}>{ "حسابي" }</Link<Route>></li>
                    </ul>
                </div>
                <div class="footer-section">
                    <h4>{ "النشرة البريدية" }</h4>
                    <NewsletterSignup />
                </div>
            </div>
        </footer>
    }
}
