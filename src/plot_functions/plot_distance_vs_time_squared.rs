// src/plot_functions/plot_distance_vs_time_squared.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::data_analysis::distance_time::FreeFallResult;
use crate::plot_framework::{build_fit_plot_config, draw_fit_plot};

/// Generates the drop height vs time-squared plot with its fitted line.
pub fn plot_distance_vs_time_squared(
    result: &FreeFallResult,
    root_name: &str,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_distance_vs_time_squared.png"));

    let config = build_fit_plot_config(
        &result.series,
        &result.fit,
        "Drop Height vs Time Squared",
        "t² (s²)",
        "H (cm)",
    )
    .ok_or("Distance vs time-squared plot: no data points")?;

    draw_fit_plot(&output_file, &config)?;
    Ok(output_file)
}

// src/plot_functions/plot_distance_vs_time_squared.rs
