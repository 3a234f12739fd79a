// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Imperial dimension labels.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Inches per metre, as printed on the plan.
pub const METERS_TO_INCHES: f64 = 39.37;

/// A length split into whole feet and inches, as used in dimension labels.
///
/// The two parts are rounded independently: feet are floored from the exact
/// inch count, inches are the rounded inch count modulo twelve. A length just
/// under a whole foot therefore reads as `0' 0''` rather than `1' 0''`.
///
/// ```
/// use floorsketch::FeetInches;
///
/// let label = FeetInches::from_meters(1.0);
/// assert_eq!((label.feet, label.inches), (3, 3));
/// assert_eq!(label.to_string(), "3' 3''");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FeetInches {
    /// Whole feet.
    pub feet: i64,
    /// Remaining inches, `0..12` for non-negative lengths.
    pub inches: i64,
}

impl FeetInches {
    /// Convert a length in metres.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "label values are far inside i64; NaN saturates to zero"
    )]
    pub fn from_meters(meters: f64) -> Self {
        let total_inches = meters * METERS_TO_INCHES;
        let feet = (total_inches / 12.0).floor() as i64;
        let inches = (total_inches.round() as i64) % 12;
        Self { feet, inches }
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' {}''", self.feet, self.inches)
    }
}
