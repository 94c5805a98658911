// SPDX-License-Identifier: MIT OR Apache-2.0

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::constants::{loading_screen_ms, LOADING_FADE_MS};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Showing,
    Hiding,
    Gone,
}

/// Full-page overlay shown on first load. It fades out after the
/// configured delay and is then removed from the tree.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let phase = use_state_eq(|| Phase::Showing);

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let hide = {
                let phase = phase.clone();
                Timeout::new(loading_screen_ms(), move || phase.set(Phase::Hiding))
            };
            let remove = Timeout::new(loading_screen_ms().saturating_add(LOADING_FADE_MS), move || {
                phase.set(Phase::Gone)
            });
            move || {
                drop(hide);
                drop(remove);
            }
        });
    }

    match *phase {
        Phase::Gone => html! {},
        current => html! {
            <div id="loadingScreen" class={classes!("loading-screen", (current == Phase::Hiding).then_some("hidden"))}>
                <div class="loader"></div>
            </div>
        },
    }
}
