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

//! Full-width hero slider with arrows, dot indicators and a parallax
//! background.
//!
//! The slider owns a [`Carousel`] whose markers post messages back to this
//! component, so automatic ticks and clicks go through the same rendering
//! path. Dropping the component drops the carousel, which clears its
//! interval.

use gloo_events::EventListener;
use storefront_core::carousel::HERO_INTERVAL_MS;
use storefront_core::navigation::parallax_offset;
use storefront_core::Carousel;
use yew::prelude::*;

use super::active_flags::ActiveFlags;
use crate::platform::{scroll_offset, IntervalScheduler};

#[derive(Clone, Debug, PartialEq)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Properties, Debug, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<HeroSlide>,
    #[prop_or(HERO_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[derive(Debug)]
pub enum Msg {
    MarkSlide(usize, bool),
    MarkDot(usize, bool),
    Prev,
    Next,
    Goto(usize),
    Scrolled(f64),
}

pub struct HeroSlider {
    carousel: Carousel<IntervalScheduler>,
    slides: ActiveFlags,
    dots: ActiveFlags,
    parallax: f64,
    _scroll: EventListener,
}

impl HeroSlider {
    /// A stopped carousel over the current slides, marking slides and dots.
    fn carousel(ctx: &Context<Self>) -> Carousel<IntervalScheduler> {
        let slide_link = ctx.link().clone();
        let dot_link = ctx.link().clone();
        Carousel::new(ctx.props().slides.len(), ctx.props().interval_ms, IntervalScheduler)
            .with_marker(move |index: usize, active: bool| {
                slide_link.send_message(Msg::MarkSlide(index, active))
            })
            .with_marker(move |index: usize, active: bool| {
                dot_link.send_message(Msg::MarkDot(index, active))
            })
    }
}

impl Component for HeroSlider {
    type Message = Msg;
    type Properties = HeroSliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let len = ctx.props().slides.len();
        let link = ctx.link().clone();
        let scroll = EventListener::new(&gloo_utils::window(), "scroll", move |_| {
            link.send_message(Msg::Scrolled(scroll_offset()))
        });

        Self {
            carousel: Self::carousel(ctx),
            slides: ActiveFlags::first_active(len),
            dots: ActiveFlags::first_active(len),
            parallax: 0.0,
            _scroll: scroll,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.slides.len() != old_props.slides.len() || props.interval_ms != old_props.interval_ms {
            let len = props.slides.len();
            // Replacing the carousel drops the old one and its timer.
            self.carousel = Self::carousel(ctx);
            self.slides = ActiveFlags::first_active(len);
            self.dots = ActiveFlags::first_active(len);
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
            Msg::MarkSlide(index, active) => self.slides.set(index, active),
            Msg::MarkDot(index, active) => self.dots.set(index, active),
            Msg::Prev => {
                self.carousel.prev();
                false
            }
            Msg::Next => {
                self.carousel.next();
                false
            }
            Msg::Goto(index) => {
                self.carousel.goto(index);
                false
            }
            Msg::Scrolled(offset) => {
                let parallax = parallax_offset(offset);
                let changed = parallax != self.parallax;
                self.parallax = parallax;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let slides = &ctx.props().slides;
        let has_slides = !slides.is_empty();

        html! {
            <section class="hero-slider" style={format!("transform: translateY({}px);", self.parallax)}>
                { for slides.iter().enumerate().map(|(index, slide)| html! {
                    <div
                        class={classes!("slide", self.slides.active_class(index))}
                        style={format!("background-image: url('{}');", slide.image)}
                    >
                        <div class="slide-overlay"></div>
                        <div class="slide-content">
                            <h1 class="slide-title">{ &slide.title }</h1>
                            <p class="slide-subtitle">{ &slide.subtitle }</p>
                            <a href={slide.cta_href.clone()} class="btn btn-primary">{ &slide.cta_label }</a>
                        </div>
                    </div>
                }) }
                if has_slides {
                    <button id="prevSlide" class="slider-btn prev" onclick={link.callback(|_| Msg::Prev)}>
                        {"❮"}
                    </button>
                    <button id="nextSlide" class="slider-btn next" onclick={link.callback(|_| Msg::Next)}>
                        {"❯"}
                    </button>
                    <div id="sliderDots" class="slider-dots">
                        { for (0..slides.len()).map(|index| html! {
                            <div
                                class={classes!("dot", self.dots.active_class(index))}
                                onclick={link.callback(move |_| Msg::Goto(index))}
                            ></div>
                        }) }
                    </div>
                }
            </section>
        }
    }
}
