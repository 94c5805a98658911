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

//! Rotating customer testimonials. Same controller as the hero slider,
//! slower cadence, no dot indicators.

use storefront_core::carousel::TESTIMONIAL_INTERVAL_MS;
use storefront_core::Carousel;
use yew::prelude::*;

use super::active_flags::ActiveFlags;
use crate::platform::IntervalScheduler;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    /// Star rating out of five.
    pub rating: u8,
}

#[derive(Properties, Debug, PartialEq)]
pub struct TestimonialsProps {
    pub items: Vec<Testimonial>,
    #[prop_or(TESTIMONIAL_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[derive(Debug)]
pub enum Msg {
    Mark(usize, bool),
    Prev,
    Next,
}

pub struct Testimonials {
    carousel: Carousel<IntervalScheduler>,
    items: ActiveFlags,
}

impl Testimonials {
    fn carousel(ctx: &Context<Self>) -> Carousel<IntervalScheduler> {
        let link = ctx.link().clone();
        Carousel::new(ctx.props().items.len(), ctx.props().interval_ms, IntervalScheduler)
            .with_marker(move |index: usize, active: bool| {
                link.send_message(Msg::Mark(index, active))
            })
    }
}

impl Component for Testimonials {
    type Message = Msg;
    type Properties = TestimonialsProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            carousel: Self::carousel(ctx),
            items: ActiveFlags::first_active(ctx.props().items.len()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.items.len() != old_props.items.len() || props.interval_ms != old_props.interval_ms {
            self.carousel = Self::carousel(ctx);
            self.items = ActiveFlags::first_active(props.items.len());
            self.carousel.init();
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.carousel.init();
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Mark(index, active) => self.items.set(index, active),
            Msg::Prev => {
                self.carousel.prev();
                false
            }
            Msg::Next => {
                self.carousel.next();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let items = &ctx.props().items;

        html! {
            <div class="testimonials-slider">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <div class={classes!("testimonial-item", self.items.active_class(index))}>
                        <div class="testimonial-stars">{ ("★").repeat(item.rating.min(5) as usize) }</div>
                        <p class="testimonial-text">{ &item.quote }</p>
                        <div class="testimonial-author">
                            <h4>{ &item.author }</h4>
                            <span>{ &item.role }</span>
                        </div>
                    </div>
                }) }
                if !items.is_empty() {
                    <div class="testimonial-controls">
                        <button class="testimonial-prev" onclick={link.callback(|_| Msg::Prev)}>{"❮"}</button>
                        <button class="testimonial-next" onclick={link.callback(|_| Msg::Next)}>{"❯"}</button>
                    </div>
                }
            </div>
        }
    }
}
