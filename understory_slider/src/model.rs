// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider model: owns [`State`], validates every mutation, and dispatches updates.
//!
//! ## Lifecycle
//!
//! - [`Model::init`] is a cold start: defaults merged with the given options, no events.
//! - [`Model::update_options`] applies a partial option set and dispatches the events its
//!   [`UpdatePlan`] collects, in canonical order.
//! - [`Model::update_handle`] moves one handle and dispatches the fixed handle-move list.
//!
//! ## Re-entrancy
//!
//! Methods take `&self`. The state borrow is released before any event is dispatched, so an
//! observer holding an `Rc<Model>` may read the state or call [`Model::update_handle`] from
//! inside a dispatch. Nested updates run to completion before the outer dispatch continues,
//! and each event fires only after the state it describes is fully consistent.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use understory_dispatch::EventManager;

use crate::options::{Options, finite};
use crate::scale::Scale;
use crate::state::State;
use crate::types::{Direction, HandleType, Handles, SliderEvent};
use crate::update::UpdatePlan;

/// Slider state engine bound to an event manager.
#[derive(Debug)]
pub struct Model {
    state: RefCell<State>,
    events: Rc<EventManager<SliderEvent>>,
}

impl Model {
    /// Create a model with default state.
    pub fn new(events: Rc<EventManager<SliderEvent>>) -> Self {
        Self::with_options(events, &Options::new())
    }

    /// Create a model initialized from `options`.
    pub fn with_options(events: Rc<EventManager<SliderEvent>>, options: &Options) -> Self {
        let model = Self {
            state: RefCell::new(State::default()),
            events,
        };
        model.init(options);
        model
    }

    /// The event manager updates are dispatched through.
    pub fn events(&self) -> &Rc<EventManager<SliderEvent>> {
        &self.events
    }

    /// Reset to defaults merged with `options`. Dispatches nothing.
    ///
    /// Bounds are normalized first, then the step, then `from` and finally `to`, which in
    /// range mode is validated against the already validated `from`.
    pub fn init(&self, options: &Options) {
        let mut s = State::default();
        if let Some(min) = finite(options.min) {
            s.min = min;
        }
        if let Some(max) = finite(options.max) {
            s.max = max;
        }
        if let Some(step) = finite(options.step) {
            s.step = step;
        }
        s.normalize_bounds();
        s.normalize_step();
        s.normalize_precision(options.precision);

        if let Some(orientation) = options.orientation {
            s.orientation = orientation;
        }
        if let Some(direction) = options.direction {
            s.direction = direction;
        }
        if let Some(range) = options.range {
            s.range = range;
        }
        if let Some(tooltips) = options.tooltips {
            s.tooltips = tooltips;
        }
        if let Some(progress_bar) = options.progress_bar {
            s.progress_bar = progress_bar;
        }

        // `to` starts at max so `from` only meets the bounds, then `to` meets `from`.
        s.to = s.max;
        s.from = finite(options.from).unwrap_or(s.min);
        s.readjust(HandleType::From);
        s.to = finite(options.to).unwrap_or(s.max);
        s.readjust(HandleType::To);

        s.scale = options.scale.clone().flatten().map(|o| Scale::from_options(&o));
        s.rebuild_scale();

        *self.state.borrow_mut() = s;
    }

    /// Apply a partial set of options and dispatch the resulting events.
    ///
    /// Returns the dispatched events, in dispatch order. Empty options change nothing and
    /// dispatch nothing.
    pub fn update_options(&self, options: &Options) -> Vec<SliderEvent> {
        let plan = UpdatePlan::for_options(options);
        if plan.is_empty() {
            return Vec::new();
        }
        self.apply(options, &plan);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("update_options", events = ?plan.events).entered();
        self.events.dispatch_events(&plan.events);
        plan.events
    }

    fn apply(&self, options: &Options, plan: &UpdatePlan) {
        let mut s = self.state.borrow_mut();
        if let Some(min) = finite(options.min) {
            s.min = min;
        }
        if let Some(max) = finite(options.max) {
            s.max = max;
        }
        if let Some(step) = finite(options.step) {
            s.step = step;
        }
        if let Some(range) = options.range {
            s.range = range;
        }
        if let Some(direction) = options.direction {
            s.direction = direction;
        }
        if let Some(orientation) = options.orientation {
            s.orientation = orientation;
        }
        if let Some(progress_bar) = options.progress_bar {
            s.progress_bar = progress_bar;
        }
        if let Some(tooltips) = options.tooltips {
            s.tooltips = tooltips;
        }
        match &options.scale {
            None => {}
            Some(None) => s.scale = None,
            Some(Some(scale)) => s.scale.get_or_insert_with(Scale::default).apply(scale),
        }

        if plan.precision {
            s.normalize_bounds();
            s.normalize_step();
            s.normalize_precision(options.precision);
        }
        // Handles follow trigger order: `to` is validated against the current `from`, then
        // `from` against the validated `to`.
        if let Some(to) = finite(options.to) {
            s.to = to;
        }
        if plan.handles.contains(Handles::TO) {
            s.readjust(HandleType::To);
        }
        if let Some(from) = finite(options.from) {
            s.from = from;
        }
        if plan.handles.contains(Handles::FROM) {
            s.readjust(HandleType::From);
        }
        if plan.scale {
            s.rebuild_scale();
        }
    }

    /// Move one handle and dispatch the handle-move events.
    ///
    /// The value is snapped, clamped, and rounded. In range mode a handle moved past the other
    /// one trades places with it. Returns the handle now holding the moved value.
    /// Non-finite values are ignored.
    pub fn update_handle(&self, value: f64, handle: HandleType) -> HandleType {
        if !value.is_finite() {
            return handle;
        }
        let placed = self.state.borrow_mut().place_handle(value, handle);
        let plan = UpdatePlan::for_handle(handle);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("update_handle", ?handle, ?placed, value).entered();
        self.events.dispatch_events(&plan.events);
        placed
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> State {
        self.state.borrow().clone()
    }

    /// Borrow the current state without cloning.
    ///
    /// `f` must not call back into the model's update methods.
    pub fn with_state<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Position of `value` along the track in percent, honoring direction.
    pub fn percent_of(&self, value: f64) -> f64 {
        let s = self.state.borrow();
        let percent = ((value - s.min) / (s.max - s.min) * 100.0).clamp(0.0, 100.0);
        match s.direction {
            Direction::Forward => percent,
            Direction::Backward => 100.0 - percent,
        }
    }

    /// Value at a track position given in percent, honoring direction. Not snapped.
    pub fn value_at_percent(&self, percent: f64) -> f64 {
        let s = self.state.borrow();
        let percent = percent.clamp(0.0, 100.0);
        let percent = match s.direction {
            Direction::Forward => percent,
            Direction::Backward => 100.0 - percent,
        };
        s.min + percent / 100.0 * (s.max - s.min)
    }

    /// The handle a click at `value` should move.
    ///
    /// Outside range mode this is always `from`. In range mode it is the closer handle;
    /// when both are equally close, `to` moves for clicks at or above it.
    pub fn nearest_handle(&self, value: f64) -> HandleType {
        let s = self.state.borrow();
        if !s.range {
            return HandleType::From;
        }
        let to_from = (value - s.from).abs();
        let to_to = (value - s.to).abs();
        if to_from < to_to || (to_from == to_to && value < s.to) {
            HandleType::From
        } else {
            HandleType::To
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ScaleOptions;
    use crate::types::{Orientation, ScaleSegment};
    use crate::types::SliderEvent::*;
    use alloc::vec;

    /// A model whose event manager records every dispatched event.
    fn recording(options: &Options) -> (Rc<Model>, Rc<RefCell<Vec<SliderEvent>>>) {
        let events = Rc::new(EventManager::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        for ev in SliderEvent::ALL {
            events.register_event(ev);
            let log = log.clone();
            events.add_event_listener(&ev, move || log.borrow_mut().push(ev));
        }
        (Rc::new(Model::with_options(events, options)), log)
    }

    fn assert_invariants(s: &State) {
        assert!(s.min < s.max, "min < max: {s:?}");
        assert!(s.step > 0.0 && s.step <= s.max - s.min, "step: {s:?}");
        assert!(s.min <= s.from && s.from <= s.max, "from in bounds: {s:?}");
        assert!(s.min <= s.to && s.to <= s.max, "to in bounds: {s:?}");
        if s.range {
            assert!(s.from <= s.to, "from <= to: {s:?}");
        }
    }

    #[test]
    fn init_uses_defaults() {
        let (model, log) = recording(&Options::new());
        let s = model.state();
        assert_eq!((s.min, s.max, s.step), (0.0, 100.0, 1.0));
        assert_eq!((s.from, s.to), (0.0, 100.0));
        assert_eq!(s.orientation, Orientation::Horizontal);
        assert_eq!(s.direction, Direction::Forward);
        assert!(!s.range && !s.tooltips && s.progress_bar);
        assert_eq!(s.precision, 0);
        assert!(s.scale.is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn init_does_not_inherit_previous_state() {
        let (model, log) = recording(&Options::new().min(10.0).max(20.0).range(true));
        model.init(&Options::new().tooltips(true));
        let s = model.state();
        assert_eq!((s.min, s.max), (0.0, 100.0));
        assert!(!s.range);
        assert!(s.tooltips);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn init_normalizes_bounds_and_step() {
        let (model, _) = recording(&Options::new().min(10.0).max(-10.0).step(-1.0));
        let s = model.state();
        assert_eq!((s.min, s.max, s.step), (-10.0, 10.0, 1.0));

        let (model, _) = recording(&Options::new().min(3.0).max(3.0).step(5.0));
        let s = model.state();
        assert_eq!((s.min, s.max, s.step), (3.0, 4.0, 1.0));
    }

    #[test]
    fn init_validates_to_against_from() {
        let (model, _) = recording(&Options::new().range(true).from(60.0).to(40.0));
        let s = model.state();
        assert_eq!((s.from, s.to), (60.0, 60.0));

        let (model, _) = recording(&Options::new().from(60.0).to(40.0));
        let s = model.state();
        assert_eq!((s.from, s.to), (60.0, 40.0));
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let (model, log) = recording(&Options::new().from(20.0).to(80.0).range(true));
        let before = model.state();
        assert!(model.update_options(&Options::new()).is_empty());
        assert!(log.borrow().is_empty());
        assert_eq!(model.state(), before);
    }

    #[test]
    fn min_update_dispatches_geometry_events_once() {
        let (model, log) = recording(
            &Options::new()
                .min(0.0)
                .max(100.0)
                .step(10.0)
                .from(20.0)
                .to(80.0),
        );
        let dispatched = model.update_options(&Options::new().min(50.0));
        let expected = vec![
            HandleFromMove,
            HandleToMove,
            ProgressBarUpdate,
            ScaleUpdate,
            SliderUpdate,
        ];
        assert_eq!(dispatched, expected);
        assert_eq!(*log.borrow(), expected);
        let s = model.state();
        assert_eq!(s.min, 50.0);
        assert_eq!(s.from, 50.0);
        assert_eq!(s.to, 80.0);
    }

    #[test]
    fn bounds_update_resnaps_handles() {
        let (model, _) = recording(&Options::new().step(10.0).from(20.0).to(80.0));
        model.update_options(&Options::new().min(5.0));
        let s = model.state();
        // Step multiples are measured from the new min.
        assert_eq!((s.from, s.to), (25.0, 85.0));
    }

    #[test]
    fn step_update_resnaps_handles() {
        let (model, _) = recording(&Options::new().from(23.0).to(77.0));
        model.update_options(&Options::new().step(10.0));
        let s = model.state();
        assert_eq!((s.from, s.to), (20.0, 80.0));
    }

    #[test]
    fn range_toggle_readjusts_to() {
        let (model, _) = recording(&Options::new().from(50.0).to(70.0).min(0.0).max(100.0));
        model.update_handle(80.0, HandleType::From);
        assert_eq!(model.state().from, 80.0);
        model.update_options(&Options::new().range(true));
        let s = model.state();
        assert!(s.to >= 70.0);
        assert!(s.from <= s.to);
    }

    #[test]
    fn collision_swap_on_handle_update() {
        let (model, log) = recording(&Options::new().range(true).from(0.0).to(10.0).step(1.0));
        let placed = model.update_handle(30.0, HandleType::From);
        let s = model.state();
        assert_eq!((s.from, s.to), (10.0, 30.0));
        assert_eq!(placed, HandleType::To);
        assert_eq!(
            *log.borrow(),
            vec![HandleFromMove, HandleToMove, ProgressBarUpdate, SliderUpdate]
        );
    }

    #[test]
    fn explicit_from_option_clamps_instead_of_swapping() {
        let (model, _) = recording(&Options::new().range(true).from(0.0).to(10.0));
        model.update_options(&Options::new().from(30.0));
        let s = model.state();
        assert_eq!((s.from, s.to), (10.0, 10.0));
    }

    #[test]
    fn explicit_from_and_to_together() {
        let (model, log) = recording(&Options::new().range(true).from(10.0).to(20.0));
        let dispatched = model.update_options(&Options::new().from(60.0).to(90.0));
        let s = model.state();
        assert_eq!((s.from, s.to), (60.0, 90.0));
        assert_eq!(
            dispatched,
            vec![HandleToMove, ProgressBarUpdate, SliderUpdate, HandleFromMove]
        );
        assert_eq!(*log.borrow(), dispatched);
    }

    #[test]
    fn crossing_explicit_handles_validate_to_first() {
        let (model, _) = recording(&Options::new().range(true).from(10.0).to(20.0));
        model.update_options(&Options::new().from(60.0).to(5.0));
        let s = model.state();
        // `to` clamps up to the current `from`, then `from` clamps down to that `to`.
        assert_eq!((s.from, s.to), (10.0, 10.0));
    }

    #[test]
    fn huge_precision_is_capped() {
        let (model, _) = recording(&Options::new());
        model.update_options(&Options::new().precision(i32::MAX));
        assert_eq!(model.state().precision, crate::float::MAX_PRECISION);
        model.update_handle(42.0, HandleType::From);
        assert_eq!(model.state().from, 42.0);
    }

    #[test]
    fn clamped_handle_keeps_exact_bound_at_high_precision() {
        let min = -348.650_985_533_978_4;
        let (model, _) = recording(&Options::new().min(min).max(0.0));
        model.update_handle(-1000.0, HandleType::From);
        let s = model.state();
        assert_eq!(s.precision, 13);
        assert_eq!(s.from, min);
    }

    #[test]
    fn handle_update_dispatches_fixed_list() {
        let (model, log) = recording(&Options::new());
        model.update_handle(42.4, HandleType::To);
        assert_eq!(model.state().to, 42.0);
        assert_eq!(
            *log.borrow(),
            vec![HandleToMove, HandleFromMove, ProgressBarUpdate, SliderUpdate]
        );
    }

    #[test]
    fn non_finite_handle_value_is_ignored() {
        let (model, log) = recording(&Options::new());
        let before = model.state();
        assert_eq!(model.update_handle(f64::NAN, HandleType::From), HandleType::From);
        assert_eq!(model.state(), before);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn handle_reaches_max_off_step() {
        let (model, _) = recording(&Options::new().max(95.0).step(10.0));
        model.update_handle(1000.0, HandleType::From);
        assert_eq!(model.state().from, 95.0);
        model.update_handle(94.0, HandleType::From);
        assert_eq!(model.state().from, 90.0);
    }

    #[test]
    fn segments_for_literal_scenario() {
        let (model, _) = recording(
            &Options::new()
                .min(0.0)
                .max(20.0)
                .step(10.0)
                .scale(Some(ScaleOptions::new().density(15.0))),
        );
        let s = model.state();
        let scale = s.scale.expect("scale enabled");
        assert_eq!(
            scale.segments,
            vec![
                ScaleSegment::number(0.0),
                ScaleSegment::line(2.5),
                ScaleSegment::line(5.0),
                ScaleSegment::line(7.5),
                ScaleSegment::number(10.0),
                ScaleSegment::line(12.5),
                ScaleSegment::line(15.0),
                ScaleSegment::line(17.5),
                ScaleSegment::number(20.0),
            ]
        );
    }

    #[test]
    fn number_segments_are_capped() {
        let (model, _) = recording(
            &Options::new()
                .min(0.0)
                .max(1000.0)
                .step(1.0)
                .scale(Some(ScaleOptions::new().density(15.0))),
        );
        let count = model.with_state(|s| s.scale.as_ref().map(Scale::number_count));
        assert!(count.is_some_and(|c| c <= 100));
    }

    #[test]
    fn scale_regenerates_on_step_change_and_can_be_disabled() {
        let (model, log) = recording(
            &Options::new()
                .max(20.0)
                .step(10.0)
                .scale(Some(ScaleOptions::new().density(100.0))),
        );
        model.update_options(&Options::new().step(5.0));
        let numbers = model.with_state(|s| s.scale.as_ref().map(Scale::number_count));
        assert_eq!(numbers, Some(5));

        log.borrow_mut().clear();
        let dispatched = model.update_options(&Options::new().scale(None));
        assert_eq!(dispatched, vec![ScaleUpdate, SliderUpdate]);
        assert!(model.state().scale.is_none());
    }

    #[test]
    fn scale_options_merge_onto_current_scale() {
        let (model, _) = recording(
            &Options::new().scale(Some(ScaleOptions::new().density(10.0).lines(false))),
        );
        model.update_options(&Options::new().scale(Some(ScaleOptions::new().numbers(false))));
        let scale = model.state().scale.expect("scale enabled");
        assert_eq!(scale.density, 10.0);
        assert!(!scale.lines);
        assert!(!scale.numbers);
    }

    #[test]
    fn precision_update_rounds_scale_and_is_floored() {
        let (model, _) = recording(&Options::new().step(0.5).max(2.0));
        assert_eq!(model.state().precision, 1);
        let dispatched = model.update_options(&Options::new().precision(-2));
        assert_eq!(dispatched, vec![TooltipsUpdate, ScaleUpdate, SliderUpdate]);
        assert_eq!(model.state().precision, 1);
        model.update_options(&Options::new().precision(3));
        assert_eq!(model.state().precision, 3);
    }

    #[test]
    fn fractional_steps_stay_clean() {
        let (model, _) = recording(&Options::new().min(0.0).max(1.0).step(0.1));
        model.update_handle(0.7, HandleType::From);
        assert_eq!(model.state().from, 0.7);
        model.update_handle(0.33, HandleType::From);
        assert_eq!(model.state().from, 0.3);
    }

    #[test]
    fn observers_see_consistent_state_and_may_reenter() {
        let events = Rc::new(EventManager::new());
        for ev in SliderEvent::ALL {
            events.register_event(ev);
        }
        let model = Rc::new(Model::with_options(
            events.clone(),
            &Options::new().range(true).from(10.0).to(20.0),
        ));
        let seen = Rc::new(RefCell::new(Vec::new()));

        // On the first `from` move, push `to` further; the nested update completes before
        // the outer dispatch continues.
        let weak = Rc::downgrade(&model);
        let log = seen.clone();
        events.add_event_listener(&HandleFromMove, move || {
            let Some(model) = weak.upgrade() else { return };
            let s = model.state();
            log.borrow_mut().push((HandleFromMove, s.from, s.to));
            if s.to < 50.0 {
                model.update_handle(50.0, HandleType::To);
            }
        });
        let weak = Rc::downgrade(&model);
        let log = seen.clone();
        events.add_event_listener(&SliderUpdate, move || {
            let Some(model) = weak.upgrade() else { return };
            let s = model.state();
            log.borrow_mut().push((SliderUpdate, s.from, s.to));
        });

        model.update_handle(15.0, HandleType::From);
        assert_eq!(
            *seen.borrow(),
            vec![
                (HandleFromMove, 15.0, 20.0),
                // nested update_handle(50, To)
                (HandleFromMove, 15.0, 50.0),
                (SliderUpdate, 15.0, 50.0),
                // outer dispatch resumes
                (SliderUpdate, 15.0, 50.0),
            ]
        );
    }

    #[test]
    fn invariants_hold_across_mixed_updates() {
        let (model, _) = recording(&Options::new().range(true).step(0.25).from(3.0).to(7.0));
        model.update_options(&Options::new().min(5.0).max(6.0));
        assert_invariants(&model.state());
        model.update_handle(-100.0, HandleType::To);
        assert_invariants(&model.state());
        model.update_options(&Options::new().max(5.0));
        assert_invariants(&model.state());
        model.update_options(&Options::new().step(1000.0).from(2.0));
        assert_invariants(&model.state());
        model.update_options(&Options::new().range(false).to(-3.0));
        assert_invariants(&model.state());
    }

    #[test]
    fn percent_conversions_honor_direction() {
        let (model, _) = recording(&Options::new().min(-50.0).max(50.0));
        assert_eq!(model.percent_of(0.0), 50.0);
        assert_eq!(model.percent_of(25.0), 75.0);
        assert_eq!(model.percent_of(500.0), 100.0);
        assert_eq!(model.value_at_percent(75.0), 25.0);

        model.update_options(&Options::new().direction(Direction::Backward));
        assert_eq!(model.percent_of(25.0), 25.0);
        assert_eq!(model.value_at_percent(75.0), -25.0);
    }

    #[test]
    fn nearest_handle_for_clicks() {
        let (model, _) = recording(&Options::new().from(20.0).to(60.0));
        assert_eq!(model.nearest_handle(90.0), HandleType::From);

        model.update_options(&Options::new().range(true));
        assert_eq!(model.nearest_handle(30.0), HandleType::From);
        assert_eq!(model.nearest_handle(50.0), HandleType::To);
        assert_eq!(model.nearest_handle(40.0), HandleType::From);

        model.update_options(&Options::new().from(60.0));
        assert_eq!(model.nearest_handle(70.0), HandleType::To);
        assert_eq!(model.nearest_handle(50.0), HandleType::From);
    }
}
