// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small public types: orientation, direction, handles, scale kinds, and the event vocabulary.

use alloc::string::ToString;

use crate::error::ParseError;

/// Implements `as_str`, `Display`, and `FromStr` over a fixed name table.
macro_rules! named {
    ($ty:ident, $err:ident, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// The identifier used in option objects and markup.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ParseError::$err(s.to_string())),
                }
            }
        }
    };
}

/// Track orientation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

named!(Orientation, Orientation, {
    Horizontal => "horizontal",
    Vertical => "vertical",
});

/// Whether values grow along the track or against it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Direction {
    /// `min` at the start of the track.
    #[default]
    Forward,
    /// `min` at the end of the track.
    Backward,
}

named!(Direction, Direction, {
    Forward => "forward",
    Backward => "backward",
});

/// One of the two handles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum HandleType {
    /// The lower handle; the only one shown outside range mode.
    From,
    /// The upper handle.
    To,
}

named!(HandleType, Handle, {
    From => "from",
    To => "to",
});

impl HandleType {
    /// The opposite handle.
    pub const fn other(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }

    /// The move event for this handle.
    pub const fn move_event(self) -> SliderEvent {
        match self {
            Self::From => SliderEvent::HandleFromMove,
            Self::To => SliderEvent::HandleToMove,
        }
    }

    pub(crate) const fn flag(self) -> Handles {
        match self {
            Self::From => Handles::FROM,
            Self::To => Handles::TO,
        }
    }
}

bitflags::bitflags! {
    /// Set of handles scheduled for recomputation during an update.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Handles: u8 {
        /// The `from` handle.
        const FROM = 0b0000_0001;
        /// The `to` handle.
        const TO   = 0b0000_0010;
    }
}

/// How scale breakpoints are chosen.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ScaleType {
    /// A number at every slider step.
    #[default]
    Steps,
    /// A number at each percentage listed in the scale `set`.
    Set,
}

named!(ScaleType, ScaleType, {
    Steps => "steps",
    Set => "set",
});

/// Kind of a generated scale segment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum SegmentKind {
    /// A labeled tick.
    Number,
    /// An unlabeled tick between numbers.
    Line,
}

/// One tick of the scale, in semantic units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleSegment {
    /// Labeled or unlabeled.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SegmentKind,
    /// Position of the tick.
    pub value: f64,
}

impl ScaleSegment {
    /// A labeled tick at `value`.
    pub const fn number(value: f64) -> Self {
        Self {
            kind: SegmentKind::Number,
            value,
        }
    }

    /// An unlabeled tick at `value`.
    pub const fn line(value: f64) -> Self {
        Self {
            kind: SegmentKind::Line,
            value,
        }
    }
}

/// The fixed event vocabulary shared by the model, the presenter, and views.
///
/// The model only ever dispatches the first seven. The click and swap events originate in
/// view collaborators and travel through the same [`EventManager`](understory_dispatch::EventManager).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum SliderEvent {
    /// The `from` handle needs repositioning.
    HandleFromMove,
    /// The `to` handle needs repositioning.
    HandleToMove,
    /// Something about the slider changed; fired by every update.
    SliderUpdate,
    /// Orientation flipped.
    OrientationUpdate,
    /// Tooltip visibility or formatting changed.
    TooltipsUpdate,
    /// The progress bar needs redrawing.
    ProgressBarUpdate,
    /// The scale needs rebuilding.
    ScaleUpdate,
    /// Track clicks should be ignored (for example during a drag).
    SliderClickDisable,
    /// Track clicks should be honored again.
    SliderClickEnable,
    /// The dragged handle crossed the other one and they traded places.
    HandlesSwap,
}

named!(SliderEvent, Event, {
    HandleFromMove => "handleFromMove",
    HandleToMove => "handleToMove",
    SliderUpdate => "sliderUpdate",
    OrientationUpdate => "orientationUpdate",
    TooltipsUpdate => "tooltipsUpdate",
    ProgressBarUpdate => "progressBarUpdate",
    ScaleUpdate => "scaleUpdate",
    SliderClickDisable => "sliderClickDisable",
    SliderClickEnable => "sliderClickEnable",
    HandlesSwap => "handlesSwap",
});

impl SliderEvent {
    /// Every event, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::HandleFromMove,
        Self::HandleToMove,
        Self::SliderUpdate,
        Self::OrientationUpdate,
        Self::TooltipsUpdate,
        Self::ProgressBarUpdate,
        Self::ScaleUpdate,
        Self::SliderClickDisable,
        Self::SliderClickEnable,
        Self::HandlesSwap,
    ];
}
