// src/types.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::data_analysis::propagation::ensure_same_len;
use crate::error::LabResult;

/// One plotted point: (x, x_err, y, y_err).
pub type PlotPoint = (f64, f64, f64, f64);

/// Paired x/y measurements with their absolute errors, as fed to a fit and a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBarSeries {
    pub x: Array1<f64>,
    pub x_err: Array1<f64>,
    pub y: Array1<f64>,
    pub y_err: Array1<f64>,
}

impl ErrorBarSeries {
    pub fn new(
        x: Array1<f64>,
        x_err: Array1<f64>,
        y: Array1<f64>,
        y_err: Array1<f64>,
    ) -> LabResult<Self> {
        ensure_same_len("x", x.len(), "x errors", x_err.len())?;
        ensure_same_len("y", y.len(), "y errors", y_err.len())?;
        ensure_same_len("x", x.len(), "y", y.len())?;
        Ok(Self { x, x_err, y, y_err })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> Vec<PlotPoint> {
        (0..self.len())
            .map(|i| (self.x[i], self.x_err[i], self.y[i], self.y_err[i]))
            .collect()
    }

    /// Smallest and largest x value (without errors).
    pub fn x_data_bounds(&self) -> Option<(f64, f64)> {
        Some((*self.x.min().ok()?, *self.x.max().ok()?))
    }

    /// Extent of `x ± x_err` over all points.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        span_with_errors(&self.x, &self.x_err)
    }

    /// Extent of `y ± y_err` over all points.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        span_with_errors(&self.y, &self.y_err)
    }
}

fn span_with_errors(values: &Array1<f64>, errors: &Array1<f64>) -> Option<(f64, f64)> {
    let low = values - &errors.mapv(f64::abs);
    let high = values + &errors.mapv(f64::abs);
    Some((*low.min().ok()?, *high.max().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_bounds_include_errors() {
        let series = ErrorBarSeries::new(
            array![1.0, 2.0, 3.0],
            array![0.1, 0.1, 0.5],
            array![10.0, 20.0, 30.0],
            array![1.0, 2.0, 3.0],
        )
        .unwrap();
        assert_eq!(series.x_data_bounds(), Some((1.0, 3.0)));
        assert_eq!(series.x_bounds(), Some((0.9, 3.5)));
        assert_eq!(series.y_bounds(), Some((9.0, 33.0)));
        assert_eq!(series.points()[2], (3.0, 0.5, 30.0, 3.0));
    }

    #[test]
    fn test_empty_series_has_no_bounds() {
        let empty = || Array1::<f64>::zeros(0);
        let series = ErrorBarSeries::new(empty(), empty(), empty(), empty()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.x_bounds(), None);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = ErrorBarSeries::new(
            array![1.0, 2.0],
            array![0.1],
            array![1.0, 2.0],
            array![0.1, 0.1],
        );
        assert!(result.is_err());
    }
}

// src/types.rs
