// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale configuration and segment generation.
//!
//! ## Breakpoints
//!
//! A scale is a sequence of [`Number`](SegmentKind::Number) ticks at breakpoints with
//! [`Line`](SegmentKind::Line) ticks spread between them.
//!
//! - [`ScaleType::Steps`]: a breakpoint at `min`, every `step` after it, and `max`.
//! - [`ScaleType::Set`]: a breakpoint at each percentage in [`Scale::set`], mapped linearly
//!   onto `[min, max]`.
//!
//! ## Lines
//!
//! Between two breakpoints `a < b` the line spacing target is `(max - min) * density / 100`.
//! The interval gets `floor((b - a) / spacing)` lines, one fewer when the spacing divides the
//! interval exactly, placed evenly so they never sit on a breakpoint.
//!
//! ## Number cap
//!
//! At most [`MAX_NUMBER_SEGMENTS`] numbers are produced. When a walk would produce more, only
//! every `k`-th breakpoint is kept, with `k` the smallest stride that fits, and `max` is always
//! kept. In steps mode this widens the labeled step to `k * step`, so labels stay on step
//! multiples.

use alloc::vec::Vec;

use crate::float::{ceil, floor, round_to};
use crate::options::ScaleOptions;
use crate::types::{ScaleSegment, ScaleType, SegmentKind};

/// Upper bound on the number of [`SegmentKind::Number`] segments in a scale.
pub const MAX_NUMBER_SEGMENTS: usize = 100;

/// Smallest accepted density.
pub const MIN_DENSITY: f64 = 0.5;

/// Largest accepted density.
pub const MAX_DENSITY: f64 = 100.0;

/// Default breakpoints for [`ScaleType::Set`].
pub const DEFAULT_SET: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Default density.
pub const DEFAULT_DENSITY: f64 = 3.0;

/// Normalized scale configuration plus its generated segments.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Scale {
    /// Breakpoint policy.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ScaleType,
    /// Sorted, deduplicated percentages in `[0, 100]`, always including both ends.
    pub set: Vec<f64>,
    /// Line spacing in percent of the value range, within `[0.5, 100]`.
    pub density: f64,
    /// Whether line ticks are shown.
    pub lines: bool,
    /// Whether number ticks are shown.
    pub numbers: bool,
    /// Generated ticks, ordered by value.
    pub segments: Vec<ScaleSegment>,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            kind: ScaleType::Steps,
            set: DEFAULT_SET.to_vec(),
            density: DEFAULT_DENSITY,
            lines: true,
            numbers: true,
            segments: Vec::new(),
        }
    }
}

/// The slice of slider state that segment generation reads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Span {
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) step: f64,
    pub(crate) precision: u32,
}

impl Scale {
    /// Defaults overridden by `options`. Segments are empty until rebuilt.
    pub(crate) fn from_options(options: &ScaleOptions) -> Self {
        let mut scale = Self::default();
        scale.apply(options);
        scale
    }

    /// Merge the present fields of `options`, normalizing as they land.
    pub(crate) fn apply(&mut self, options: &ScaleOptions) {
        if let Some(kind) = options.kind {
            self.kind = kind;
        }
        if let Some(set) = &options.set {
            self.set = normalize_set(set);
        }
        if let Some(density) = options.density.filter(|d| !d.is_nan()) {
            self.density = density.clamp(MIN_DENSITY, MAX_DENSITY);
        }
        if let Some(lines) = options.lines {
            self.lines = lines;
        }
        if let Some(numbers) = options.numbers {
            self.numbers = numbers;
        }
    }

    /// Regenerate [`Scale::segments`] from scratch.
    pub(crate) fn rebuild(&mut self, span: Span) {
        let breakpoints = match self.kind {
            ScaleType::Steps => step_breakpoints(span),
            ScaleType::Set => set_breakpoints(&self.set, span),
        };
        self.segments = segments_between(&breakpoints, span, self.density);
    }

    /// Segments filtered by the `lines` and `numbers` toggles.
    pub fn visible_segments(&self) -> impl Iterator<Item = &ScaleSegment> + '_ {
        self.segments.iter().filter(|s| match s.kind {
            SegmentKind::Number => self.numbers,
            SegmentKind::Line => self.lines,
        })
    }

    /// Count of number segments.
    pub fn number_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Number)
            .count()
    }
}

/// Drop out-of-range and non-finite percentages, force in `0` and `100`, sort, dedupe.
pub fn normalize_set(values: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && (0.0..=100.0).contains(v))
        // Fold `-0.0` into `0.0` so dedup sees one zero.
        .map(|v| if v == 0.0 { 0.0 } else { v })
        .chain([0.0, 100.0])
        .collect();
    out.sort_by(f64::total_cmp);
    out.dedup();
    out
}

fn step_breakpoints(span: Span) -> Vec<f64> {
    let range = span.max - span.min;
    let intervals = ceil(range / span.step);
    let budget = (MAX_NUMBER_SEGMENTS - 1) as f64;
    let stride = if intervals > budget {
        ceil(intervals / budget)
    } else {
        1.0
    };
    #[cfg(feature = "tracing")]
    {
        if stride > 1.0 {
            tracing::trace!(stride, "scale numbers thinned to fit the cap");
        }
    }
    let scale_step = span.step * stride;

    let mut out = alloc::vec![span.min];
    for i in 1..MAX_NUMBER_SEGMENTS - 1 {
        let v = round_to(span.min + i as f64 * scale_step, span.precision);
        if v >= span.max {
            break;
        }
        out.push(v);
    }
    out.push(span.max);
    out
}

fn set_breakpoints(set: &[f64], span: Span) -> Vec<f64> {
    let range = span.max - span.min;
    let mut all: Vec<f64> = set
        .iter()
        .map(|p| {
            round_to(span.min + p / 100.0 * range, span.precision).clamp(span.min, span.max)
        })
        .collect();
    all.dedup();

    if all.len() <= MAX_NUMBER_SEGMENTS {
        return all;
    }
    let last = all.len() - 1;
    let stride = last.div_ceil(MAX_NUMBER_SEGMENTS - 1);
    #[cfg(feature = "tracing")]
    tracing::trace!(stride, "scale set thinned to fit the cap");
    let mut out: Vec<f64> = all[..last].iter().copied().step_by(stride).collect();
    out.push(all[last]);
    out
}

fn segments_between(breakpoints: &[f64], span: Span, density: f64) -> Vec<ScaleSegment> {
    let line_step = (span.max - span.min) * density / 100.0;
    let mut out = Vec::new();
    for (i, &a) in breakpoints.iter().enumerate() {
        out.push(ScaleSegment::number(a));
        let Some(&b) = breakpoints.get(i + 1) else {
            break;
        };
        let interval = b - a;
        let lines = line_count(interval, line_step);
        let parts = (lines + 1) as f64;
        for j in 1..=lines {
            out.push(ScaleSegment::line(a + interval * j as f64 / parts));
        }
    }
    out
}

/// Lines strictly inside an interval, so none lands on the closing breakpoint.
#[allow(
    clippy::cast_possible_truncation,
    reason = "count is positive and bounded by 100 / MIN_DENSITY."
)]
fn line_count(interval: f64, line_step: f64) -> usize {
    if interval <= 0.0 || line_step <= 0.0 {
        return 0;
    }
    // Round away float noise so 9 / 3 counts as exactly divisible.
    let ratio = round_to(interval / line_step, 9);
    let whole = floor(ratio);
    let count = if whole == ratio { whole - 1.0 } else { whole };
    if count <= 0.0 {
        return 0;
    }
    count as usize
}
