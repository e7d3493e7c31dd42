// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied options for [`Model::init`](crate::Model::init) and
//! [`Model::update_options`](crate::Model::update_options).
//!
//! Every field is optional. An absent field keeps its current value on update, or its built-in
//! default on init. Non-finite numbers are treated as absent.
//!
//! ```
//! use understory_slider::{Options, ScaleOptions, ScaleType};
//!
//! let opts = Options::new()
//!     .min(0.0)
//!     .max(20.0)
//!     .step(10.0)
//!     .range(true)
//!     .scale(Some(ScaleOptions::new().kind(ScaleType::Steps).density(15.0)));
//! assert!(!opts.is_empty());
//! assert!(Options::new().is_empty());
//! ```

use alloc::vec::Vec;

use crate::types::{Direction, Orientation, ScaleType};

/// Partial scale configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ScaleOptions {
    /// Breakpoint policy.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<ScaleType>,
    /// Breakpoints in percent of the value range, used in [`ScaleType::Set`] mode.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub set: Option<Vec<f64>>,
    /// Line tick spacing in percent of the value range; clamped to `[0.5, 100]`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub density: Option<f64>,
    /// Whether line ticks are shown.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lines: Option<bool>,
    /// Whether number ticks are shown.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub numbers: Option<bool>,
}

impl ScaleOptions {
    /// Empty scale options; every field falls back to the current or default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breakpoint policy.
    pub fn kind(mut self, kind: ScaleType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the breakpoint percentages.
    pub fn set(mut self, set: impl Into<Vec<f64>>) -> Self {
        self.set = Some(set.into());
        self
    }

    /// Set the line density.
    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// Show or hide line ticks.
    pub fn lines(mut self, lines: bool) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Show or hide number ticks.
    pub fn numbers(mut self, numbers: bool) -> Self {
        self.numbers = Some(numbers);
        self
    }
}

/// Partial slider configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Options {
    /// Lower handle position.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub from: Option<f64>,
    /// Upper handle position.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub to: Option<f64>,
    /// Lower bound.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min: Option<f64>,
    /// Upper bound.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max: Option<f64>,
    /// Snap increment.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub step: Option<f64>,
    /// Track orientation.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub orientation: Option<Orientation>,
    /// Value direction along the track.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub direction: Option<Direction>,
    /// Two handles instead of one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub range: Option<bool>,
    /// Show value tooltips over the handles.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tooltips: Option<bool>,
    /// Show the filled progress bar.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub progress_bar: Option<bool>,
    /// Decimal places; negative values are treated as zero.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub precision: Option<i32>,
    /// `None`: leave the scale alone. `Some(None)`: disable it. `Some(Some(..))`: enable or
    /// reconfigure it.
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            deserialize_with = "explicit_null"
        )
    )]
    pub scale: Option<Option<ScaleOptions>>,
}

/// Keep a JSON `null` distinct from a missing field.
#[cfg(feature = "serde")]
fn explicit_null<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(de).map(Some)
}

impl Options {
    /// Empty options; an update with these dispatches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set the lower handle position.
    pub fn from(mut self, from: f64) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the upper handle position.
    pub fn to(mut self, to: f64) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the snap increment.
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Set the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set the direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Enable or disable range mode.
    pub fn range(mut self, range: bool) -> Self {
        self.range = Some(range);
        self
    }

    /// Show or hide tooltips.
    pub fn tooltips(mut self, tooltips: bool) -> Self {
        self.tooltips = Some(tooltips);
        self
    }

    /// Show or hide the progress bar.
    pub fn progress_bar(mut self, progress_bar: bool) -> Self {
        self.progress_bar = Some(progress_bar);
        self
    }

    /// Set the decimal places.
    pub fn precision(mut self, precision: i32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Enable (`Some`) or disable (`None`) the scale.
    pub fn scale(mut self, scale: Option<ScaleOptions>) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// `Some(v)` only for finite numbers.
pub(crate) fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}
