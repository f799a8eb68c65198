// src/data_analysis/significant.rs

use std::fmt;

/// Finds the decimal position of the first significant digit of `value`.
///
/// Used to pick the display precision of a measurement from its uncertainty:
/// an error of 0.05 is shown with 2 decimals, 0.345 with 1.
///
/// Returns 0 for zero, for magnitudes of 1 or more, and for non-finite input.
pub fn first_significant_decimal(value: f64) -> usize {
    if !value.is_finite() || value == 0.0 {
        return 0;
    }
    let magnitude = value.abs();
    if magnitude >= 1.0 {
        return 0;
    }
    magnitude.log10().floor().abs() as usize
}

/// Rounds half away from zero to `decimals` fractional digits.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals.min(i32::MAX as usize) as i32);
    let scaled = value * factor;
    // Subnormal errors ask for more digits than an f64 can scale to
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// A value and its uncertainty rounded to the uncertainty's first significant digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedPair {
    pub value: f64,
    pub error: f64,
    pub decimals: usize,
}

impl fmt::Display for RoundedPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.decimals;
        write!(f, "{:.*} ± {:.*}", d, self.value, d, self.error)
    }
}

/// Rounds `value` and `error` to the decimal place of the first significant digit of `error`.
pub fn round_pair(value: f64, error: f64) -> RoundedPair {
    let decimals = first_significant_decimal(error);
    RoundedPair {
        value: round_to_decimals(value, decimals),
        error: round_to_decimals(error, decimals),
        decimals,
    }
}


// src/data_analysis/significant.rs
