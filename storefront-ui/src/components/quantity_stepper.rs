// SPDX-License-Identifier: MIT OR Apache-2.0

use storefront_core::catalog::Quantity;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuantityStepperProps {
    pub value: Quantity,
    pub on_change: Callback<Quantity>,
}

/// `-` / input / `+` control. The value never drops below one and
/// anything unparseable typed into the input snaps back to one.
#[function_component(QuantityStepper)]
pub fn quantity_stepper(props: &QuantityStepperProps) -> Html {
    let value = props.value;

    let on_minus = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(value.decrement()))
    };
    let on_plus = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(value.increment()))
    };
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let parsed = Quantity::parse(&input.value());
            // Props may not change (e.g. "abc" -> 1 while already 1), so fix the DOM too.
            input.set_value(&parsed.get().to_string());
            on_change.emit(parsed);
        })
    };

    html! {
        <div class="quantity-selector">
            <button class="quantity-minus" onclick={on_minus}>{ "−" }</button>
            <input
                class="quantity-input"
                type="number"
                min={Quantity::MIN.to_string()}
                value={value.get().to_string()}
                onchange={on_input}
            />
            <button class="quantity-plus" onclick={on_plus}>{ "+" }</button>
        </div>
    }
}
