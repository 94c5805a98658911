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

//! Rotating carousel controller.
//!
//! A [`Carousel`] owns a fixed number of items, the index of the active one,
//! and at most one repeating timer that advances it. The controller never
//! touches the DOM itself: it talks to two seams.
//!
//! - **[`ActiveMarker`]**: marks or unmarks an item index. Slides and their
//!   companion dot indicators are both markers, so they stay in sync on
//!   every transition.
//! - **[`Scheduler`]**: starts a repeating timer and hands back a handle
//!   that cancels the timer when dropped.
//!
//! Manual navigation (`next`, `prev`, `goto`) restarts the timer so the
//! user always gets a full interval before the next automatic advance.
//! Timer ticks advance without restarting.

use std::cell::RefCell;
use std::rc::Rc;

/// Automatic-advance interval of the hero slider.
pub const HERO_INTERVAL_MS: u32 = 5000;

/// Automatic-advance interval of the testimonial rotator.
pub const TESTIMONIAL_INTERVAL_MS: u32 = 6000;

/// Applies or removes the active marker on one item.
pub trait ActiveMarker {
    fn set_active(&self, index: usize, active: bool);
}

impl<F: Fn(usize, bool)> ActiveMarker for F {
    fn set_active(&self, index: usize, active: bool) {
        self(index, active)
    }
}

/// A repeating timer primitive.
///
/// The returned handle owns the timer: dropping it must guarantee the
/// callback never fires again.
pub trait Scheduler {
    type Handle;

    fn repeat(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Self::Handle;
}

/// Index arithmetic over a ring of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    active: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active index, or `None` for an empty ring.
    pub fn active(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.active)
    }

    pub fn step_forward(&mut self) -> Option<usize> {
        self.jump(self.active + 1)
    }

    pub fn step_back(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.jump(self.active + self.len - 1)
    }

    /// Jump to `index`, wrapping anything past the end back into range.
    pub fn jump(&mut self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.active = index % self.len;
        Some(self.active)
    }
}

struct Track {
    state: CarouselState,
    markers: Vec<Box<dyn ActiveMarker>>,
}

impl Track {
    fn render(&self) {
        let Some(active) = self.state.active() else {
            return;
        };
        for marker in &self.markers {
            for index in 0..self.state.len() {
                marker.set_active(index, false);
            }
            marker.set_active(active, true);
        }
    }

    fn apply(&mut self, step: impl FnOnce(&mut CarouselState) -> Option<usize>) -> Option<usize> {
        let moved = step(&mut self.state);
        if let Some(index) = moved {
            log::debug!("carousel moved to item {index} of {}", self.state.len());
            self.render();
        }
        moved
    }
}

/// Carousel controller; see the module docs.
pub struct Carousel<S: Scheduler> {
    track: Rc<RefCell<Track>>,
    scheduler: S,
    interval_ms: u32,
    timer: Option<S::Handle>,
}

impl<S: Scheduler> Carousel<S> {
    /// Build a stopped controller over `len` items. Call [`Carousel::init`]
    /// once the markers are attached.
    pub fn new(len: usize, interval_ms: u32, scheduler: S) -> Self {
        Self {
            track: Rc::new(RefCell::new(Track {
                state: CarouselState::new(len),
                markers: Vec::new(),
            })),
            scheduler,
            interval_ms,
            timer: None,
        }
    }

    /// Attach a marker. Every marker receives every transition.
    pub fn with_marker(self, marker: impl ActiveMarker + 'static) -> Self {
        self.track.borrow_mut().markers.push(Box::new(marker));
        self
    }

    /// Activate the first item and start advancing. No-op when empty.
    pub fn init(&mut self) {
        if self.is_empty() {
            log::debug!("carousel has no items, staying idle");
            return;
        }
        self.track.borrow_mut().apply(|state| state.jump(0));
        self.start();
    }

    /// Start automatic advancing, replacing any running timer.
    pub fn start(&mut self) {
        if self.is_empty() {
            return;
        }
        self.stop();
        let track = Rc::downgrade(&self.track);
        let handle = self.scheduler.repeat(
            self.interval_ms,
            Box::new(move || {
                if let Some(track) = track.upgrade() {
                    track.borrow_mut().apply(CarouselState::step_forward);
                }
            }),
        );
        self.timer = Some(handle);
    }

    /// Stop automatic advancing. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next(&mut self) {
        self.navigate(CarouselState::step_forward);
    }

    pub fn prev(&mut self) {
        self.navigate(CarouselState::step_back);
    }

    /// Jump to `index`. Out-of-range indices wrap modulo the item count.
    pub fn goto(&mut self, index: usize) {
        self.navigate(|state| state.jump(index));
    }

    /// Advance one item without touching the timer. This is what a timer
    /// tick does.
    pub fn tick(&self) {
        self.track.borrow_mut().apply(CarouselState::step_forward);
    }

    pub fn active_index(&self) -> Option<usize> {
        self.track.borrow().state.active()
    }

    pub fn len(&self) -> usize {
        self.track.borrow().state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track.borrow().state.is_empty()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Cancel the timer and release the controller.
    pub fn dispose(self) {
        drop(self);
    }

    fn navigate(&mut self, step: impl FnOnce(&mut CarouselState) -> Option<usize>) {
        let moved = self.track.borrow_mut().apply(step);
        if moved.is_some() {
            self.start();
        }
    }
}

impl<S: Scheduler> Drop for Carousel<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(any(test, feature = "testing"))]
pub use manual::{ManualScheduler, ManualTimer};

#[cfg(any(test, feature = "testing"))]
mod manual {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Registered {
        period_ms: u32,
        tick: Rc<dyn Fn()>,
        live: Rc<Cell<bool>>,
    }

    /// Deterministic scheduler for tests: timers only fire on [`ManualScheduler::fire`].
    ///
    /// Clones share the same timer table.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        timers: Rc<RefCell<Vec<Registered>>>,
    }

    /// Handle returned by [`ManualScheduler`]; dropping it cancels the timer.
    pub struct ManualTimer {
        live: Rc<Cell<bool>>,
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualTimer;

        fn repeat(&self, period_ms: u32, tick: Box<dyn Fn()>) -> ManualTimer {
            let live = Rc::new(Cell::new(true));
            self.timers.borrow_mut().push(Registered {
                period_ms,
                tick: Rc::from(tick),
                live: live.clone(),
            });
            ManualTimer { live }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Timers that have not been cancelled.
        pub fn live_timers(&self) -> usize {
            self.timers.borrow().iter().filter(|t| t.live.get()).count()
        }

        /// Timers ever started, cancelled ones included.
        pub fn started(&self) -> usize {
            self.timers.borrow().len()
        }

        pub fn live_periods(&self) -> Vec<u32> {
            self.timers
                .borrow()
                .iter()
                .filter(|t| t.live.get())
                .map(|t| t.period_ms)
                .collect()
        }

        /// Fire every live timer once.
        pub fn fire(&self) {
            let ticks: Vec<Rc<dyn Fn()>> = self
                .timers
                .borrow()
                .iter()
                .filter(|t| t.live.get())
                .map(|t| t.tick.clone())
                .collect();
            for tick in ticks {
                tick();
            }
        }
    }
}
