// src/data_analysis/distance_time.rs
//
// Drop-height vs stopwatch-time analysis: mean times, propagated errors and the
// distance against time-squared fit that yields the gravitational acceleration.

use ndarray::Array1;

use crate::constants::{
    RULER_INSTRUMENTAL_ERROR_CM, RULER_PARALLAX_ERROR_CM, TIMER_INSTRUMENTAL_ERROR_S,
};
use crate::data_analysis::propagation::{
    full_error, mean, power_error, quadrature_arrays, standard_error_of_mean, Measured,
};
use crate::data_analysis::regression::{linear_regression, LinearFit};
use crate::data_analysis::significant::{round_pair, RoundedPair};
use crate::data_input::measurements::TimedSample;
use crate::error::{LabError, LabResult};
use crate::types::ErrorBarSeries;

/// Instrument errors applied to every timed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingErrorSettings {
    pub timer_instrumental_s: f64,
    pub distance_instrumental_cm: f64,
    pub distance_parallax_cm: f64,
}

impl Default for TimingErrorSettings {
    fn default() -> Self {
        Self {
            timer_instrumental_s: TIMER_INSTRUMENTAL_ERROR_S,
            distance_instrumental_cm: RULER_INSTRUMENTAL_ERROR_CM,
            distance_parallax_cm: RULER_PARALLAX_ERROR_CM,
        }
    }
}

/// Per-sample means and errors for a set of timed drops.
#[derive(Debug, Clone)]
pub struct DistanceTimeAnalysis {
    pub distances_cm: Array1<f64>,
    pub times_s: Array1<f64>,
    pub timer_error_s: Array1<f64>,
    pub statistical_error_s: Array1<f64>,
    pub total_time_error_s: Array1<f64>,
    pub total_distance_error_cm: Array1<f64>,
}

/// Outcome of the distance vs t² fit.
#[derive(Debug, Clone)]
pub struct FreeFallResult {
    pub series: ErrorBarSeries,
    pub fit: LinearFit,
    /// g = 2 * slope, in m/s^2
    pub gravity_m_s2: Measured,
}

impl DistanceTimeAnalysis {
    pub fn from_samples(
        samples: &[TimedSample],
        settings: &TimingErrorSettings,
    ) -> LabResult<Self> {
        let n = samples.len();
        if n == 0 {
            return Err(LabError::InsufficientData {
                what: "timed samples",
                needed: 1,
                got: 0,
            });
        }

        let distances_cm: Array1<f64> = samples.iter().map(|s| s.distance_cm).collect();
        let times_s = samples
            .iter()
            .map(|s| mean(&s.times_s))
            .collect::<LabResult<Array1<f64>>>()?;
        let statistical_error_s: Array1<f64> = samples
            .iter()
            .map(|s| standard_error_of_mean(&s.times_s))
            .collect();

        let timer_error_s = full_error(n, settings.timer_instrumental_s);
        let total_time_error_s = quadrature_arrays(&timer_error_s, &statistical_error_s)?;

        let total_distance_error_cm = quadrature_arrays(
            &full_error(n, settings.distance_instrumental_cm),
            &full_error(n, settings.distance_parallax_cm),
        )?;

        Ok(Self {
            distances_cm,
            times_s,
            timer_error_s,
            statistical_error_s,
            total_time_error_s,
            total_distance_error_cm,
        })
    }

    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_s.is_empty()
    }

    /// Mean time and total error of each sample, rounded to the error's first significant digit.
    pub fn rounded_times(&self) -> Vec<RoundedPair> {
        self.times_s
            .iter()
            .zip(self.total_time_error_s.iter())
            .map(|(&t, &e)| round_pair(t, e))
            .collect()
    }

    /// t² and its error 2·t·σt.
    pub fn time_squared(&self) -> (Array1<f64>, Array1<f64>) {
        let t2 = self.times_s.mapv(|t| t * t);
        let errors = self
            .times_s
            .iter()
            .zip(self.total_time_error_s.iter())
            .map(|(&t, &e)| power_error(t, e, 2.0))
            .collect();
        (t2, errors)
    }

    /// Regresses distance (cm) on t² (s²); for a drop from rest s = g t² / 2.
    pub fn fit_distance_vs_time_squared(&self) -> LabResult<FreeFallResult> {
        let (t2, t2_err) = self.time_squared();
        let series = ErrorBarSeries::new(
            t2,
            t2_err,
            self.distances_cm.clone(),
            self.total_distance_error_cm.clone(),
        )?;
        let fit = linear_regression(series.x.view(), series.y.view())?;
        // cm/s^2 -> m/s^2
        let gravity_m_s2 = fit.slope_measured().scaled(2.0 / 100.0);
        log::info!(
            "Distance vs t² fit: slope = {:e} cm/s², g = {:.4} m/s²",
            fit.slope,
            gravity_m_s2.value
        );
        Ok(FreeFallResult {
            series,
            fit,
            gravity_m_s2,
        })
    }
}


// src/data_analysis/distance_time.rs
