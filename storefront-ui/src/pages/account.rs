// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::forms::AccountForms;

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    html! {
        <main class="account-page">
            <div class="container">
                <AccountForms />
            </div>
        </main>
    }
}
