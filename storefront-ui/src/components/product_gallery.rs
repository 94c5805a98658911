// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product image gallery with a cross-faded main image.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::constants::GALLERY_FADE_MS;

#[derive(Properties, PartialEq)]
pub struct ProductGalleryProps {
    pub images: Vec<String>,
    #[prop_or_default]
    pub alt: AttrValue,
}

pub enum Msg {
    Select(usize),
    Swap(usize),
}

pub struct ProductGallery {
    shown: usize,
    fading: bool,
    // Pending swap; replacing it cancels the previous one.
    swap: Option<Timeout>,
}

impl Component for ProductGallery {
    type Message = Msg;
    type Properties = ProductGalleryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            shown: 0,
            fading: false,
            swap: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(index) => {
                if index == self.shown && self.swap.is_none() {
                    return false;
                }
                let link = ctx.link().clone();
                self.fading = true;
                self.swap = Some(Timeout::new(GALLERY_FADE_MS, move || {
                    link.send_message(Msg::Swap(index))
                }));
                true
            }
            Msg::Swap(index) => {
                self.swap = None;
                self.shown = index;
                self.fading = false;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if self.shown >= ctx.props().images.len() {
            self.shown = 0;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(main) = props.images.get(self.shown) else {
            return html! {};
        };
        let style = if self.fading { "opacity: 0" } else { "opacity: 1" };

        html! {
            <div class="product-gallery">
                <div class="main-image">
                    <img id="mainProductImage" src={main.clone()} alt={props.alt.clone()} {style} />
                </div>
                <div class="thumbnail-images">
                    { for props.images.iter().enumerate().map(|(index, src)| html! {
                        <img
                            class={classes!("thumbnail", (index == self.shown).then_some("active"))}
                            src={src.clone()}
                            alt={props.alt.clone()}
                            onclick={ctx.link().callback(move |_: MouseEvent| Msg::Select(index))}
                        />
                    }) }
                </div>
            </div>
        }
    }
}
