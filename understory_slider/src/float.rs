// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers that route through `std` or `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_slider requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
#[inline]
pub(crate) fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn round(x: f64) -> f64 {
    libm::round(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn floor(x: f64) -> f64 {
    x.floor()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn floor(x: f64) -> f64 {
    libm::floor(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

#[cfg(feature = "std")]
#[inline]
fn powi(x: f64, n: i32) -> f64 {
    x.powi(n)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn powi(x: f64, n: i32) -> f64 {
    libm::pow(x, f64::from(n))
}

/// `10^exp` for a decimal-place count, saturating at [`MAX_PRECISION`].
#[inline]
pub(crate) fn pow10(exp: u32) -> f64 {
    let exp = i32::try_from(exp.min(MAX_PRECISION)).unwrap_or(0);
    powi(10.0, exp)
}

/// Round `value` to `precision` decimal places, halves away from zero.
///
/// Precision beyond [`MAX_PRECISION`] is treated as [`MAX_PRECISION`].
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let factor = pow10(precision);
    let scaled = value * factor;
    // Past 2^52 every f64 is already an integer; dividing back would only add error.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    let out = round(scaled) / factor;
    // Normalize negative zero so snapshots compare cleanly.
    if out == 0.0 { 0.0 } else { out }
}

/// Number of decimal places in the shortest representation of `value`, capped at
/// [`MAX_PRECISION`].
pub(crate) fn decimals(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    // `Display` for f64 never uses exponent notation.
    let text = alloc::format!("{value}");
    let places = text.split_once('.').map_or(0, |(_, f)| f.len());
    u32::try_from(places).map_or(MAX_PRECISION, |p| p.min(MAX_PRECISION))
}

/// Upper bound for decimal places; beyond this f64 carries no more information.
pub(crate) const MAX_PRECISION: u32 = 15;
