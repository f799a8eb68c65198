// src/plot_functions/plot_strain_vs_force.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::data_analysis::wire_strain::ElasticModulusResult;
use crate::plot_framework::{build_fit_plot_config, draw_fit_plot};

/// Generates the wire strain vs applied weight plot with its fitted line.
pub fn plot_strain_vs_force(
    result: &ElasticModulusResult,
    root_name: &str,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_strain_vs_force.png"));

    let config = build_fit_plot_config(
        &result.series,
        &result.fit,
        "Wire Strain vs Weight",
        "F (N)",
        "ΔL / L0",
    )
    .ok_or("Strain vs force plot: no data points")?;

    draw_fit_plot(&output_file, &config)?;
    Ok(output_file)
}

// src/plot_functions/plot_strain_vs_force.rs
