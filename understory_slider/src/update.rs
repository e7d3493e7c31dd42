// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Update rules: which events and recomputations each option change implies.
//!
//! ## Overview
//!
//! Every option field maps to a [`Trigger`]. Each trigger has a static [`UpdateRule`]: the
//! events it needs dispatched (in order), the handles it invalidates, and whether the scale
//! must be regenerated.
//!
//! ## Ordering
//!
//! [`Trigger::ALL`] is the canonical evaluation order. [`UpdatePlan::for_options`] walks it and
//! appends each rule's events, skipping events already queued. The dispatch order is therefore
//! the first-occurrence order across triggers, and every event fires at most once per update.
//!
//! | Trigger | Events | Handles | Scale |
//! |---|---|---|---|
//! | bounds | handleFromMove, handleToMove, progressBarUpdate, scaleUpdate, sliderUpdate | from, to | yes |
//! | step | same as bounds | from, to | yes |
//! | range | handleToMove, progressBarUpdate, sliderUpdate | to | no |
//! | direction | handleFromMove, handleToMove, progressBarUpdate, scaleUpdate, sliderUpdate | | no |
//! | orientation | orientationUpdate, then as direction | | no |
//! | progressBar | progressBarUpdate, sliderUpdate | | no |
//! | tooltips | tooltipsUpdate, sliderUpdate | | no |
//! | to | handleToMove, progressBarUpdate, sliderUpdate | to | no |
//! | from | handleFromMove, progressBarUpdate, sliderUpdate | from | no |
//! | scale | scaleUpdate, sliderUpdate | | yes |
//! | precision | tooltipsUpdate, scaleUpdate, sliderUpdate | | yes |

use alloc::vec::Vec;

use crate::options::{Options, finite};
use crate::types::{HandleType, Handles, SliderEvent};

use crate::types::SliderEvent::{
    HandleFromMove, HandleToMove, OrientationUpdate, ProgressBarUpdate, ScaleUpdate, SliderUpdate,
    TooltipsUpdate,
};

/// A group of option fields sharing one update rule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Trigger {
    /// `min` and/or `max`.
    Bounds,
    /// `step`.
    Step,
    /// `range`.
    Range,
    /// `direction`.
    Direction,
    /// `orientation`.
    Orientation,
    /// `progressBar`.
    ProgressBar,
    /// `tooltips`.
    Tooltips,
    /// Explicit `to`.
    To,
    /// Explicit `from`.
    From,
    /// `scale`, including disabling it.
    Scale,
    /// Explicit `precision`.
    Precision,
}

/// Downstream effects of one trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UpdateRule {
    /// Events to dispatch, in order.
    pub events: &'static [SliderEvent],
    /// Handles to push back through the adjustment pipeline.
    pub handles: Handles,
    /// Whether the scale segments must be regenerated.
    pub scale: bool,
}

const GEOMETRY: &[SliderEvent] = &[
    HandleFromMove,
    HandleToMove,
    ProgressBarUpdate,
    ScaleUpdate,
    SliderUpdate,
];

impl Trigger {
    /// Canonical evaluation order.
    pub const ALL: [Self; 11] = [
        Self::Bounds,
        Self::Step,
        Self::Range,
        Self::Direction,
        Self::Orientation,
        Self::ProgressBar,
        Self::Tooltips,
        Self::To,
        Self::From,
        Self::Scale,
        Self::Precision,
    ];

    /// The static rule for this trigger.
    pub const fn rule(self) -> UpdateRule {
        const BOTH: Handles = Handles::FROM.union(Handles::TO);
        const NONE: Handles = Handles::empty();
        match self {
            Self::Bounds | Self::Step => UpdateRule {
                events: GEOMETRY,
                handles: BOTH,
                scale: true,
            },
            Self::Range => UpdateRule {
                events: &[HandleToMove, ProgressBarUpdate, SliderUpdate],
                handles: Handles::TO,
                scale: false,
            },
            Self::Direction => UpdateRule {
                events: GEOMETRY,
                handles: NONE,
                scale: false,
            },
            Self::Orientation => UpdateRule {
                events: &[
                    OrientationUpdate,
                    HandleFromMove,
                    HandleToMove,
                    ProgressBarUpdate,
                    ScaleUpdate,
                    SliderUpdate,
                ],
                handles: NONE,
                scale: false,
            },
            Self::ProgressBar => UpdateRule {
                events: &[ProgressBarUpdate, SliderUpdate],
                handles: NONE,
                scale: false,
            },
            Self::Tooltips => UpdateRule {
                events: &[TooltipsUpdate, SliderUpdate],
                handles: NONE,
                scale: false,
            },
            Self::To => UpdateRule {
                events: &[HandleToMove, ProgressBarUpdate, SliderUpdate],
                handles: Handles::TO,
                scale: false,
            },
            Self::From => UpdateRule {
                events: &[HandleFromMove, ProgressBarUpdate, SliderUpdate],
                handles: Handles::FROM,
                scale: false,
            },
            Self::Scale => UpdateRule {
                events: &[ScaleUpdate, SliderUpdate],
                handles: NONE,
                scale: true,
            },
            Self::Precision => UpdateRule {
                events: &[TooltipsUpdate, ScaleUpdate, SliderUpdate],
                handles: NONE,
                scale: true,
            },
        }
    }

    /// Whether `options` carries a usable value for this trigger.
    pub fn is_present(self, options: &Options) -> bool {
        match self {
            Self::Bounds => finite(options.min).is_some() || finite(options.max).is_some(),
            Self::Step => finite(options.step).is_some(),
            Self::Range => options.range.is_some(),
            Self::Direction => options.direction.is_some(),
            Self::Orientation => options.orientation.is_some(),
            Self::ProgressBar => options.progress_bar.is_some(),
            Self::Tooltips => options.tooltips.is_some(),
            Self::To => finite(options.to).is_some(),
            Self::From => finite(options.from).is_some(),
            Self::Scale => options.scale.is_some(),
            Self::Precision => options.precision.is_some(),
        }
    }
}

/// Accumulated effects of one update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Events to dispatch, deduplicated, in first-occurrence order.
    pub events: Vec<SliderEvent>,
    /// Handles to recompute.
    pub handles: Handles,
    /// Whether to regenerate the scale.
    pub scale: bool,
    /// Whether bounds, step, or precision changed, so precision needs renormalizing.
    pub precision: bool,
}

impl UpdatePlan {
    /// Evaluate every trigger present in `options`, in canonical order.
    pub fn for_options(options: &Options) -> Self {
        let mut plan = Self::default();
        for trigger in Trigger::ALL {
            if trigger.is_present(options) {
                plan.push(trigger);
            }
        }
        plan
    }

    /// The fixed plan for a direct handle move.
    ///
    /// Both move events fire whatever handle moved: the progress bar and collision visuals
    /// depend on both.
    pub fn for_handle(handle: HandleType) -> Self {
        Self {
            events: alloc::vec![
                handle.move_event(),
                handle.other().move_event(),
                ProgressBarUpdate,
                SliderUpdate,
            ],
            handles: handle.flag(),
            scale: false,
            precision: false,
        }
    }

    /// Fold one trigger's rule into the plan.
    pub fn push(&mut self, trigger: Trigger) {
        let rule = trigger.rule();
        for &event in rule.events {
            if !self.events.contains(&event) {
                self.events.push(event);
            }
        }
        self.handles |= rule.handles;
        self.scale |= rule.scale;
        self.precision |= matches!(
            trigger,
            Trigger::Bounds | Trigger::Step | Trigger::Precision
        );
    }

    /// True if nothing needs to happen.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
