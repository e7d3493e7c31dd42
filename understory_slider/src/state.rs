// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical slider state and the normalization rules that keep it valid.

use crate::float::{MAX_PRECISION, decimals, round, round_to};
use crate::scale::{Scale, Span};
use crate::types::{Direction, HandleType, Orientation};

/// Default lower bound.
pub const DEFAULT_MIN: f64 = 0.0;
/// Default upper bound.
pub const DEFAULT_MAX: f64 = 100.0;
/// Default step.
pub const DEFAULT_STEP: f64 = 1.0;

/// The complete, validated state of one slider.
///
/// Invariants after every model operation:
/// - `min < max` and `0 < step <= max - min`.
/// - Both handles lie in `[min, max]`; in range mode `from <= to`.
/// - `precision` is at least the decimal places of `min`, `max`, and `step`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct State {
    /// Lower handle position.
    pub from: f64,
    /// Upper handle position.
    pub to: f64,
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Snap increment, relative to `min`.
    pub step: f64,
    /// Track orientation.
    pub orientation: Orientation,
    /// Value direction along the track.
    pub direction: Direction,
    /// Two handles instead of one.
    pub range: bool,
    /// Show value tooltips.
    pub tooltips: bool,
    /// Show the filled progress bar.
    pub progress_bar: bool,
    /// Decimal places handle values are rounded to.
    pub precision: u32,
    /// Scale configuration and ticks, when enabled.
    pub scale: Option<Scale>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            from: DEFAULT_MIN,
            to: DEFAULT_MAX,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            orientation: Orientation::Horizontal,
            direction: Direction::Forward,
            range: false,
            tooltips: false,
            progress_bar: true,
            precision: 0,
            scale: None,
        }
    }
}

impl State {
    /// Current value of a handle.
    pub fn handle(&self, handle: HandleType) -> f64 {
        match handle {
            HandleType::From => self.from,
            HandleType::To => self.to,
        }
    }

    pub(crate) fn set_handle(&mut self, handle: HandleType, value: f64) {
        match handle {
            HandleType::From => self.from = value,
            HandleType::To => self.to = value,
        }
    }

    /// Swap inverted bounds and separate equal ones (`max = min + 1`).
    pub(crate) fn normalize_bounds(&mut self) {
        if self.min > self.max {
            #[cfg(feature = "tracing")]
            tracing::trace!(min = self.min, max = self.max, "swapping inverted bounds");
            core::mem::swap(&mut self.min, &mut self.max);
        }
        if self.min == self.max {
            #[cfg(feature = "tracing")]
            tracing::trace!(min = self.min, "separating equal bounds");
            let bumped = self.min + 1.0;
            // Past 2^53 adding one is lost to rounding.
            self.max = if bumped > self.min {
                bumped
            } else {
                self.min.next_up()
            };
        }
    }

    /// Coerce `step` into `(0, max - min]`.
    pub(crate) fn normalize_step(&mut self) {
        if self.step.is_nan() || self.step <= 0.0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(step = self.step, "non-positive step coerced to 1");
            self.step = 1.0;
        }
        let span = self.max - self.min;
        if self.step > span {
            #[cfg(feature = "tracing")]
            tracing::trace!(step = self.step, span, "step clamped to the value range");
            self.step = span;
        }
    }

    /// Raise `requested` (or the current precision) to what `min`, `max`, and `step` imply.
    pub(crate) fn normalize_precision(&mut self, requested: Option<i32>) {
        let requested = requested
            .map_or(self.precision, |p| u32::try_from(p).unwrap_or(0))
            .min(MAX_PRECISION);
        let implied = decimals(self.min)
            .max(decimals(self.max))
            .max(decimals(self.step));
        self.precision = requested.max(implied);
    }

    pub(crate) fn span(&self) -> Span {
        Span {
            min: self.min,
            max: self.max,
            step: self.step,
            precision: self.precision,
        }
    }

    pub(crate) fn rebuild_scale(&mut self) {
        let span = self.span();
        if let Some(scale) = &mut self.scale {
            scale.rebuild(span);
        }
    }

    /// Nearest step multiple, measured from `min`.
    fn snap(&self, value: f64) -> f64 {
        round((value - self.min) / self.step) * self.step + self.min
    }

    /// Clamp against the other handle (range mode, when `collision` is on), then the bounds.
    fn validate(&self, value: f64, handle: HandleType, collision: bool) -> f64 {
        let mut value = value;
        if collision && self.range {
            value = match handle {
                HandleType::From => value.min(self.to),
                HandleType::To => value.max(self.from),
            };
        }
        value.clamp(self.min, self.max)
    }

    /// Snap and validate a raw handle value.
    ///
    /// When the raw value already violates a bound or the other handle, the clamped raw value
    /// wins over the snapped one, so handles can sit exactly on `min`, `max`, or each other.
    /// Rounding happens before the last validation, so it never leaves the bounds.
    pub(crate) fn adjust(&self, value: f64, handle: HandleType, collision: bool) -> f64 {
        let validated = self.validate(value, handle, collision);
        if validated != value {
            return validated;
        }
        let snapped = self.validate(self.snap(value), handle, collision);
        self.validate(round_to(snapped, self.precision), handle, collision)
    }

    /// Re-run the adjustment pipeline on a handle's current value.
    pub(crate) fn readjust(&mut self, handle: HandleType) {
        let value = self.adjust(self.handle(handle), handle, true);
        self.set_handle(handle, value);
    }

    /// Move one handle directly. In range mode a handle pushed past the other one swaps
    /// places with it instead of stopping.
    ///
    /// Returns the handle that ends up holding the new value.
    pub(crate) fn place_handle(&mut self, value: f64, handle: HandleType) -> HandleType {
        let candidate = self.adjust(value, handle, false);
        if self.range {
            let crossed = match handle {
                HandleType::From => candidate > self.to,
                HandleType::To => candidate < self.from,
            };
            if crossed {
                #[cfg(feature = "tracing")]
                tracing::trace!(?handle, candidate, "handles swapped on collision");
                let other = handle.other();
                let other_value = self.handle(other);
                self.set_handle(handle, other_value);
                self.set_handle(other, candidate);
                return other;
            }
        }
        self.set_handle(handle, candidate);
        handle
    }
}
