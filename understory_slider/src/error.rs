// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for the few fallible entry points.
//!
//! Model updates never fail; out-of-domain numbers are normalized instead.
//! Only parsing of textual identifiers can be rejected.

use alloc::string::String;

/// A textual identifier did not name a known variant.
///
/// Returned by the [`FromStr`](core::str::FromStr) impls in [`types`](crate::types).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not `horizontal` or `vertical`.
    #[error("unknown orientation `{0}`")]
    Orientation(String),
    /// Not `forward` or `backward`.
    #[error("unknown direction `{0}`")]
    Direction(String),
    /// Not `from` or `to`.
    #[error("unknown handle `{0}`")]
    Handle(String),
    /// Not `steps` or `set`.
    #[error("unknown scale type `{0}`")]
    ScaleType(String),
    /// Not a name in the slider event vocabulary.
    #[error("unknown slider event `{0}`")]
    Event(String),
}
