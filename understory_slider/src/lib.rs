// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Slider: the state engine behind a single or range slider.
//!
//! ## Overview
//!
//! A [`Model`] owns the canonical [`State`] of one slider: bounds, step, handle positions,
//! presentation flags, and an optional generated [`Scale`]. Every mutation goes through the
//! model, which keeps the state valid and then tells observers what changed by dispatching
//! [`SliderEvent`]s through an [`understory_dispatch::EventManager`].
//!
//! - [`Model::init`] resets to defaults merged with [`Options`]. No events.
//! - [`Model::update_options`] applies a partial option set. Each present field maps to a
//!   [`Trigger`] whose [`UpdateRule`] names the events to fire, the handles to re-validate,
//!   and whether the scale is regenerated. Events fire once each, in a fixed order.
//! - [`Model::update_handle`] moves one handle; in range mode a handle dragged past the other
//!   one trades places with it.
//!
//! A [`Presenter`] wires a model to a [`SliderView`], translating each event into a view call.
//!
//! ## Validation
//!
//! Handles snap to multiples of `step` measured from `min`, clamp into `[min, max]` and, in
//! range mode, against each other, then round to `precision` decimal places. A raw value that
//! is already out of bounds is clamped without snapping, so `max` stays reachable when it is
//! not a step multiple.
//!
//! Rounding is half away from zero, not half up: at zero decimal places `2.5` becomes `3`
//! and `-2.5` becomes `-3`. Precision is capped at 15 decimal places. A rounded value is
//! validated once more, so it never leaves `[min, max]`.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use understory_dispatch::EventManager;
//! use understory_slider::{HandleType, Model, Options, SliderEvent};
//!
//! let events = Rc::new(EventManager::new());
//! for ev in SliderEvent::ALL {
//!     events.register_event(ev);
//! }
//! let model = Model::with_options(events, &Options::new().step(10.0).range(true));
//!
//! let fired = model.update_options(&Options::new().min(50.0));
//! assert_eq!(fired.last(), Some(&SliderEvent::SliderUpdate));
//! assert_eq!(model.state().from, 50.0);
//!
//! model.update_handle(73.0, HandleType::To);
//! assert_eq!(model.state().to, 70.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): float math through the standard library.
//! - `libm`: float math through `libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for options and state, with camelCase field names.
//! - `tracing`: debug spans around updates and trace events for input normalization.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod float;
pub mod model;
pub mod options;
pub mod presenter;
pub mod scale;
pub mod state;
pub mod types;
pub mod update;

pub use error::ParseError;
pub use model::Model;
pub use options::{Options, ScaleOptions};
pub use presenter::{Presenter, SliderView};
pub use scale::{MAX_NUMBER_SEGMENTS, Scale, normalize_set};
pub use state::State;
pub use types::{
    Direction, HandleType, Handles, Orientation, ScaleSegment, ScaleType, SegmentKind,
    SliderEvent,
};
pub use update::{Trigger, UpdatePlan, UpdateRule};
