// src/data_analysis/regression.rs

use ndarray::{Array1, ArrayView1};

use crate::data_analysis::propagation::{ensure_same_len, Measured};
use crate::error::{LabError, LabResult};

/// Result of an ordinary least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub slope_stderr: f64,
    pub intercept_stderr: f64,
    /// Pearson correlation coefficient
    pub r_value: f64,
    pub n_points: usize,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }

    pub fn slope_measured(&self) -> Measured {
        Measured::new(self.slope, self.slope_stderr)
    }

    pub fn intercept_measured(&self) -> Measured {
        Measured::new(self.intercept, self.intercept_stderr)
    }

    /// End points of the fitted segment over `[x_min, x_max]`.
    pub fn line_over(&self, x_min: f64, x_max: f64) -> Vec<(f64, f64)> {
        vec![(x_min, self.predict(x_min)), (x_max, self.predict(x_max))]
    }
}

/// Fits a straight line through `(x, y)` by ordinary least squares.
///
/// Uses biased (1/n) sums of squares, the same convention as the usual
/// `linregress` routine, so the standard errors match it:
/// `slope_stderr = sqrt((1 - r^2) * Syy / Sxx / (n - 2))` and
/// `intercept_stderr = slope_stderr * sqrt(Sxx + mean(x)^2)`.
/// With exactly two points the line is exact and both errors are 0.
pub fn linear_regression(x: ArrayView1<f64>, y: ArrayView1<f64>) -> LabResult<LinearFit> {
    ensure_same_len("x", x.len(), "y", y.len())?;
    let n = x.len();
    if n < 2 {
        return Err(LabError::InsufficientData {
            what: "linear regression",
            needed: 2,
            got: n,
        });
    }

    let n_f = n as f64;
    let x_mean = x.sum() / n_f;
    let y_mean = y.sum() / n_f;

    let dx: Array1<f64> = x.mapv(|v| v - x_mean);
    let dy: Array1<f64> = y.mapv(|v| v - y_mean);
    let ssxm = dx.dot(&dx) / n_f;
    let ssym = dy.dot(&dy) / n_f;
    let ssxym = dx.dot(&dy) / n_f;

    if ssxm == 0.0 {
        return Err(LabError::DegenerateFit);
    }

    let slope = ssxym / ssxm;
    let intercept = y_mean - slope * x_mean;

    let r_value = if ssym == 0.0 {
        0.0
    } else {
        (ssxym / (ssxm * ssym).sqrt()).clamp(-1.0, 1.0)
    };

    let (slope_stderr, intercept_stderr) = if n == 2 {
        (0.0, 0.0)
    } else {
        let df = (n - 2) as f64;
        let slope_stderr = ((1.0 - r_value * r_value) * ssym / ssxm / df).max(0.0).sqrt();
        let intercept_stderr = slope_stderr * (ssxm + x_mean * x_mean).sqrt();
        (slope_stderr, intercept_stderr)
    };

    log::debug!(
        "OLS over {n} points: slope={slope:e} ± {slope_stderr:e}, \
         intercept={intercept:e} ± {intercept_stderr:e}, r={r_value:.6}"
    );

    Ok(LinearFit {
        slope,
        intercept,
        slope_stderr,
        intercept_stderr,
        r_value,
        n_points: n,
    })
}


// src/data_analysis/regression.rs
