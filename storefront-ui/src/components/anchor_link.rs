// SPDX-License-Identifier: MIT OR Apache-2.0

use storefront_core::navigation::{anchor_scroll_top, anchor_target};
use yew::prelude::*;

use crate::platform::{scroll_offset, smooth_scroll_to};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after the page scrolled to the target.
    #[prop_or_default]
    pub on_follow: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that smooth-scrolls its target below the fixed header.
/// Links without a matching element keep the browser's default behaviour.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = gloo_utils::document().get_element_by_id(id) else {
                return;
            };
            event.prevent_default();
            let top = target.get_bounding_client_rect().top();
            smooth_scroll_to(anchor_scroll_top(top, scroll_offset()));
            on_follow.emit(());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
