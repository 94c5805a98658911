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

//! Toast host. Provides a [`Notifier`] to its children and renders the
//! toasts they raise.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use storefront_core::notifications::{ToastKind, ToastQueue, EXIT_ANIMATION_MS};
use yew::prelude::*;

use crate::context::Notifier;

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Debug)]
pub enum Msg {
    Push(ToastKind, String),
    BeginExit(u64),
    Remove(u64),
}

pub struct NotificationHost {
    queue: ToastQueue,
    // One pending timeout per toast; dropping it cancels.
    timers: HashMap<u64, Timeout>,
    notifier: Notifier,
}

impl Component for NotificationHost {
    type Message = Msg;
    type Properties = NotificationHostProps;

    fn create(ctx: &Context<Self>) -> Self {
        let notifier = Notifier::new(
            ctx.link()
                .callback(|(kind, message): (ToastKind, String)| Msg::Push(kind, message)),
        );
        Self {
            queue: ToastQueue::default(),
            timers: HashMap::new(),
            notifier,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Push(kind, message) => {
                log::info!("notification: {message}");
                let id = self.queue.push(kind, message);
                let link = ctx.link().clone();
                self.timers.insert(
                    id,
                    Timeout::new(kind.visible_ms(), move || {
                        link.send_message(Msg::BeginExit(id))
                    }),
                );
                true
            }
            Msg::BeginExit(id) => {
                if !self.queue.begin_exit(id) {
                    return false;
                }
                let link = ctx.link().clone();
                self.timers.insert(
                    id,
                    Timeout::new(EXIT_ANIMATION_MS, move || link.send_message(Msg::Remove(id))),
                );
                true
            }
            Msg::Remove(id) => {
                self.timers.remove(&id);
                self.queue.remove(id)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Notifier> context={self.notifier.clone()}>
                { for ctx.props().children.iter() }
                <div class="toast-stack">
                    { for self.queue.iter().map(|toast| html! {
                        <div
                            key={toast.id.to_string()}
                            class={classes!(toast.kind.css_class(), toast.leaving.then_some("leaving"))}
                        >
                            { &toast.message }
                        </div>
                    }) }
                </div>
            </ContextProvider<Notifier>>
        }
    }
}
