// src/data_analysis/propagation.rs
//
// Closed-form uncertainty propagation for independent errors.

use ndarray::{Array1, Zip};

use crate::data_analysis::significant::{round_pair, RoundedPair};
use crate::error::{LabError, LabResult};

/// A scalar quantity with its absolute uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub value: f64,
    pub error: f64,
}

impl Measured {
    pub fn new(value: f64, error: f64) -> Self {
        Self { value, error }
    }

    /// Relative uncertainty, or infinity for a zero value.
    pub fn relative_error(&self) -> f64 {
        if self.value == 0.0 {
            f64::INFINITY
        } else {
            (self.error / self.value).abs()
        }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.value * factor, scale_error(factor, self.error))
    }

    pub fn rounded(&self) -> RoundedPair {
        round_pair(self.value, self.error)
    }
}

/// Quadrature sum of two independent errors.
pub fn quadrature(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Quadrature sum of any number of independent errors.
pub fn quadrature_sum(errors: &[f64]) -> f64 {
    errors.iter().map(|e| e * e).sum::<f64>().sqrt()
}

/// Element-wise quadrature of two error arrays of equal length.
pub fn quadrature_arrays(a: &Array1<f64>, b: &Array1<f64>) -> LabResult<Array1<f64>> {
    ensure_same_len("first error array", a.len(), "second error array", b.len())?;
    Ok(Zip::from(a).and(b).map_collect(|&x, &y| x.hypot(y)))
}

/// Constant error array, as produced by an instrument's fixed resolution.
pub fn full_error(len: usize, value: f64) -> Array1<f64> {
    Array1::from_elem(len, value)
}

pub fn mean(samples: &[f64]) -> LabResult<f64> {
    Array1::from(samples.to_vec())
        .mean()
        .ok_or(LabError::InsufficientData {
            what: "mean",
            needed: 1,
            got: 0,
        })
}

/// Standard error of the mean with the sample standard deviation (ddof = 1).
///
/// A single reading has no spread to estimate, so it contributes 0.
pub fn standard_error_of_mean(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        log::warn!(
            "standard error of the mean needs at least 2 readings, got {}; using 0",
            samples.len()
        );
        return 0.0;
    }
    let arr = Array1::from(samples.to_vec());
    arr.std(1.0) / (samples.len() as f64).sqrt()
}

/// Error of `factor * x` given the error of `x`.
pub fn scale_error(factor: f64, error: f64) -> f64 {
    (factor * error).abs()
}

/// Error of `x^exponent` given `x` and its error.
pub fn power_error(value: f64, error: f64, exponent: f64) -> f64 {
    (exponent * value.powf(exponent - 1.0) * error).abs()
}

/// Error of `numerator / denominator` for independent errors.
pub fn ratio_error(
    numerator: f64,
    numerator_error: f64,
    denominator: f64,
    denominator_error: f64,
) -> f64 {
    quadrature(
        numerator_error / denominator,
        numerator * denominator_error / (denominator * denominator),
    )
}

/// Relative error of a product or quotient of independent quantities.
pub fn relative_quadrature(terms: &[Measured]) -> f64 {
    terms
        .iter()
        .map(|m| m.relative_error().powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Applies [`ratio_error`] element-wise with a scalar denominator.
pub fn ratio_error_array(
    numerators: &Array1<f64>,
    numerator_errors: &Array1<f64>,
    denominator: Measured,
) -> LabResult<Array1<f64>> {
    ensure_same_len("values", numerators.len(), "errors", numerator_errors.len())?;
    Ok(Zip::from(numerators)
        .and(numerator_errors)
        .map_collect(|&n, &e| ratio_error(n, e, denominator.value, denominator.error)))
}

pub(crate) fn ensure_same_len(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> LabResult<()> {
    if left_len != right_len {
        return Err(LabError::LengthMismatch {
            left,
            left_len,
            right,
            right_len,
        });
    }
    Ok(())
}


// src/data_analysis/propagation.rs
