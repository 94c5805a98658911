// SPDX-License-Identifier: MIT OR Apache-2.0

use storefront_core::accordion::Accordion as AccordionState;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AccordionEntry {
    pub title: String,
    pub body: String,
}

#[derive(Properties, Debug, PartialEq)]
pub struct AccordionProps {
    pub entries: Vec<AccordionEntry>,
}

/// FAQ-style accordion with at most one section open.
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let state = use_state_eq(AccordionState::default);

    html! {
        <div class="accordion">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = *state;
                        next.toggle(index);
                        state.set(next);
                    })
                };
                html! {
                    <div class={classes!("accordion-item", state.is_open(index).then_some("active"))}>
                        <button class="accordion-header" {onclick}>
                            <span>{ &entry.title }</span>
                            <span class="accordion-icon">{ if state.is_open(index) { "−" } else { "+" } }</span>
                        </button>
                        <div class="accordion-content">
                            <p>{ &entry.body }</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
