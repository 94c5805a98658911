// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::forms::ContactForm;
use crate::components::reveal::Reveal;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <main class="contact-page">
            <Reveal class="container">
                <h1 class="page-title">{ "اتصل بنا" }</h1>
                <p>{ "يسعدنا تواصلك معنا في أي وقت." }</p>
                <ContactForm />
            </Reveal>
        </main>
    }
}
