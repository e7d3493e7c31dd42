// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter: routes model events to a view.
//!
//! The presenter owns the event manager, registers every [`SliderEvent`] once, and subscribes
//! one observer per event that forwards to the matching [`SliderView`] method with a fresh
//! state snapshot. Views are free to call back into the presenter or model from any method.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use understory_slider::{HandleType, Options, Presenter, SliderView, State};
//!
//! #[derive(Default)]
//! struct Thumb {
//!     at: Cell<f64>,
//! }
//!
//! impl SliderView for Thumb {
//!     fn move_handle(&self, handle: HandleType, state: &State) {
//!         if handle == HandleType::From {
//!             self.at.set(state.from);
//!         }
//!     }
//! }
//!
//! let view = Rc::new(Thumb::default());
//! let presenter = Presenter::new(view.clone(), &Options::new().step(5.0));
//! presenter.drag_handle(42.0, HandleType::From);
//! assert_eq!(view.at.get(), 40.0);
//! ```

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

use understory_dispatch::EventManager;

use crate::model::Model;
use crate::options::Options;
use crate::state::State;
use crate::types::{HandleType, SliderEvent};

/// Rendering side of a slider.
///
/// Every method defaults to doing nothing, so a view implements only what it draws.
pub trait SliderView {
    /// A handle moved, or its position needs redrawing.
    fn move_handle(&self, handle: HandleType, state: &State) {
        let _ = (handle, state);
    }

    /// The whole slider needs a refresh. Fires once per update.
    fn update_slider(&self, state: &State) {
        let _ = state;
    }

    /// The track orientation changed.
    fn update_orientation(&self, state: &State) {
        let _ = state;
    }

    /// Tooltip visibility or formatting changed.
    fn update_tooltips(&self, state: &State) {
        let _ = state;
    }

    /// The progress bar needs redrawing.
    fn update_progress_bar(&self, state: &State) {
        let _ = state;
    }

    /// The scale was regenerated or toggled.
    fn update_scale(&self, state: &State) {
        let _ = state;
    }

    /// Track clicks were disabled or re-enabled.
    fn set_click_enabled(&self, enabled: bool) {
        let _ = enabled;
    }

    /// The handles traded places after a collision.
    fn swap_handles(&self) {}
}

/// Wires a [`Model`] to a [`SliderView`] through a shared event manager.
pub struct Presenter<V: SliderView + 'static> {
    model: Rc<Model>,
    view: Rc<V>,
}

impl<V: SliderView + 'static> core::fmt::Debug for Presenter<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Presenter")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl<V: SliderView + 'static> Presenter<V> {
    /// Build the model from `options` and subscribe `view` to every event.
    pub fn new(view: Rc<V>, options: &Options) -> Self {
        let events = Rc::new(EventManager::new());
        for event in SliderEvent::ALL {
            events.register_event(event);
        }
        let model = Rc::new(Model::with_options(events.clone(), options));
        for event in SliderEvent::ALL {
            let weak = Rc::downgrade(&model);
            let view = view.clone();
            events.add_event_listener(&event, move || route(event, &weak, &*view));
        }
        Self { model, view }
    }

    /// The underlying model.
    pub fn model(&self) -> &Rc<Model> {
        &self.model
    }

    /// The subscribed view.
    pub fn view(&self) -> &Rc<V> {
        &self.view
    }

    /// A snapshot of the model state.
    pub fn state(&self) -> State {
        self.model.state()
    }

    /// Forward to [`Model::update_options`].
    pub fn update_options(&self, options: &Options) -> Vec<SliderEvent> {
        self.model.update_options(options)
    }

    /// Dispatch a view-originated event such as [`SliderEvent::SliderClickDisable`].
    pub fn notify(&self, event: SliderEvent) {
        self.model.events().dispatch_event(&event);
    }

    /// Move a handle in response to a drag or click.
    ///
    /// Dispatches [`SliderEvent::HandlesSwap`] after the move events when the handles traded
    /// places. Returns the handle now holding the value, which a drag should keep moving.
    pub fn drag_handle(&self, value: f64, handle: HandleType) -> HandleType {
        let placed = self.model.update_handle(value, handle);
        if placed != handle {
            self.notify(SliderEvent::HandlesSwap);
        }
        placed
    }

    /// Move whichever handle is nearest to the clicked track position, in percent.
    pub fn click_track(&self, percent: f64) -> HandleType {
        let value = self.model.value_at_percent(percent);
        let handle = self.model.nearest_handle(value);
        self.drag_handle(value, handle)
    }
}

fn route<V: SliderView>(event: SliderEvent, model: &Weak<Model>, view: &V) {
    match event {
        SliderEvent::HandleFromMove => {
            with_state(model, |s| view.move_handle(HandleType::From, s));
        }
        SliderEvent::HandleToMove => with_state(model, |s| view.move_handle(HandleType::To, s)),
        SliderEvent::SliderUpdate => with_state(model, |s| view.update_slider(s)),
        SliderEvent::OrientationUpdate => with_state(model, |s| view.update_orientation(s)),
        SliderEvent::TooltipsUpdate => with_state(model, |s| view.update_tooltips(s)),
        SliderEvent::ProgressBarUpdate => with_state(model, |s| view.update_progress_bar(s)),
        SliderEvent::ScaleUpdate => with_state(model, |s| view.update_scale(s)),
        SliderEvent::SliderClickDisable => view.set_click_enabled(false),
        SliderEvent::SliderClickEnable => view.set_click_enabled(true),
        SliderEvent::HandlesSwap => view.swap_handles(),
    }
}

/// Run `f` on a fresh snapshot, if the model is still alive.
fn with_state(model: &Weak<Model>, f: impl FnOnce(&State)) {
    if let Some(model) = model.upgrade() {
        f(&model.state());
    }
}
