// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for comparing floating-point coefficients.

/// Default tolerance used when comparing results of inexact arithmetic.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Checks whether two numbers are equal within a mixed absolute/relative tolerance.
///
/// The numbers are considered equal when `|a - b| <= tolerance * max(1, |a|, |b|)`,
/// which behaves like an absolute tolerance near zero and a relative one for large
/// magnitudes.
///
/// # Arguments
///
/// * `a` - First value.
/// * `b` - Second value.
/// * `tolerance` - Non-negative tolerance.
///
/// # Returns
///
/// `true` if the values are close. Identical values (including infinities of the
/// same sign) are always close; `NaN` is never close to anything.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= tolerance * scale
}

/// Checks whether two coefficient slices are equal within a tolerance.
///
/// The shorter slice is treated as if padded with zeros, so `[1.0, 2.0]` and
/// `[1.0, 2.0, 1e-15]` compare equal under a reasonable tolerance.
///
/// # Arguments
///
/// * `a` - First coefficient slice.
/// * `b` - Second coefficient slice.
/// * `tolerance` - Non-negative tolerance passed to [`approx_eq`].
pub fn approx_eq_coefficients(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    let len = std::cmp::max(a.len(), b.len());
    (0..len).all(|i| {
        let x = a.get(i).copied().unwrap_or(0.0);
        let y = b.get(i).copied().unwrap_or(0.0);
        approx_eq(x, y, tolerance)
    })
}
