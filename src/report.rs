// src/report.rs
//
// Text rendering of rounded results and the CSV export of plotted points.

use std::path::Path;

use serde::Serialize;

use crate::data_analysis::distance_time::{DistanceTimeAnalysis, FreeFallResult};
use crate::data_analysis::regression::LinearFit;
use crate::data_analysis::significant::round_pair;
use crate::data_analysis::wire_strain::{ElasticModulusResult, WireStrainAnalysis};
use crate::error::LabResult;
use crate::types::ErrorBarSeries;

/// Legend text for a fitted line: `y = (a ± σa)·x + (b ± σb)`.
pub fn fit_equation_label(fit: &LinearFit) -> String {
    format!(
        "Fit: y = ({})·x + ({})",
        fit.slope_measured().rounded(),
        fit.intercept_measured().rounded()
    )
}

fn fit_summary(fit: &LinearFit, x_unit: &str, y_unit: &str) -> String {
    format!(
        "Linear fit over {} points:\n  {}\n  slope     = {} {y_unit}/{x_unit}\n  \
         intercept = {} {y_unit}\n  r²        = {:.6}\n",
        fit.n_points,
        fit_equation_label(fit),
        fit.slope_measured().rounded(),
        fit.intercept_measured().rounded(),
        fit.r_squared()
    )
}

/// One line per sample: rounded mean time and its total error.
pub fn times_report(analysis: &DistanceTimeAnalysis) -> String {
    let mut out = String::from("Mean times (s):\n");
    for (i, pair) in analysis.rounded_times().iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}: {:>8} cm  t = {}\n",
            i + 1,
            analysis.distances_cm[i],
            pair
        ));
    }
    out
}

pub fn free_fall_report(analysis: &DistanceTimeAnalysis, result: &FreeFallResult) -> String {
    let mut out = times_report(analysis);
    out.push_str("\nTime squared (s²):\n");
    for (i, &(t2, t2_err, _, _)) in result.series.points().iter().enumerate() {
        out.push_str(&format!("  {:>2}: t² = {}\n", i + 1, round_pair(t2, t2_err)));
    }
    out.push('\n');
    out.push_str(&fit_summary(&result.fit, "s²", "cm"));
    out.push_str(&format!(
        "\nGravitational acceleration g = {} m/s²\n",
        result.gravity_m_s2.rounded()
    ));
    out
}

pub fn wire_report(analysis: &WireStrainAnalysis, result: &ElasticModulusResult) -> String {
    let area = analysis.cross_section_m2;
    let mut out = format!(
        "Wire length L0 = {} mm\nWire diameter d = {} mm\n\
         Cross-section area A = {} m² ({:e} ± {:e})\n\nLoads:\n",
        analysis.wire_length_mm.rounded(),
        analysis.diameter_mm.rounded(),
        area.rounded(),
        area.value,
        area.error
    );
    for (i, &(f, f_err, strain, strain_err)) in result.series.points().iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}: F = {} N  ΔL/L0 = {}\n",
            i + 1,
            round_pair(f, f_err),
            round_pair(strain, strain_err)
        ));
    }
    out.push('\n');
    out.push_str(&fit_summary(&result.fit, "N", "1"));
    let modulus_gpa = result.elastic_modulus_pa.scaled(1e-9);
    out.push_str(&format!(
        "\nElastic modulus E = {} GPa ({:.4e} Pa)\n",
        modulus_gpa.rounded(),
        result.elastic_modulus_pa.value
    ));
    out
}

#[derive(Debug, Serialize)]
struct PointRow {
    x: f64,
    x_err: f64,
    y: f64,
    y_err: f64,
    y_fit: f64,
}

/// Writes the plotted points and the fitted value at each x as CSV.
pub fn export_points_csv(path: &Path, series: &ErrorBarSeries, fit: &LinearFit) -> LabResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (x, x_err, y, y_err) in series.points() {
        writer.serialize(PointRow {
            x,
            x_err,
            y,
            y_err,
            y_fit: fit.predict(x),
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    log::info!("Point table written to '{}'", path.display());
    Ok(())
}


// src/report.rs
