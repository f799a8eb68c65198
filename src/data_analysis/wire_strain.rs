// src/data_analysis/wire_strain.rs
//
// Loaded-wire experiment: weights from accumulated masses, strain ΔL/L0 and the
// elastic modulus from the slope of strain against force.

use std::f64::consts::PI;

use ndarray::Array1;

use crate::constants::{
    DIAL_GAUGE_ERROR_MM, MASS_INSTRUMENTAL_ERROR_G, MICROMETER_ERROR_MM, STANDARD_GRAVITY_M_S2,
    WIRE_LENGTH_ERROR_MM,
};
use crate::data_analysis::propagation::{
    ensure_same_len, full_error, mean, quadrature, ratio_error_array, relative_quadrature,
    scale_error, standard_error_of_mean, Measured,
};
use crate::data_analysis::regression::{linear_regression, LinearFit};
use crate::data_input::measurements::WireSetup;
use crate::error::{LabError, LabResult};
use crate::types::ErrorBarSeries;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireErrorSettings {
    /// Per-load scale error (g)
    pub mass_instrumental_g: f64,
    pub wire_length_mm: f64,
    pub micrometer_mm: f64,
    pub elongation_mm: f64,
    pub gravity_m_s2: f64,
}

impl Default for WireErrorSettings {
    fn default() -> Self {
        Self {
            mass_instrumental_g: MASS_INSTRUMENTAL_ERROR_G,
            wire_length_mm: WIRE_LENGTH_ERROR_MM,
            micrometer_mm: MICROMETER_ERROR_MM,
            elongation_mm: DIAL_GAUGE_ERROR_MM,
            gravity_m_s2: STANDARD_GRAVITY_M_S2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WireStrainAnalysis {
    pub forces_n: Array1<f64>,
    pub force_errors_n: Array1<f64>,
    pub wire_length_mm: Measured,
    pub diameter_mm: Measured,
    pub radius_m: Measured,
    pub cross_section_m2: Measured,
    pub strain: Array1<f64>,
    pub strain_errors: Array1<f64>,
}

#[derive(Debug, Clone)]
pub struct ElasticModulusResult {
    pub series: ErrorBarSeries,
    pub fit: LinearFit,
    /// E = 1 / (slope * A), in Pa
    pub elastic_modulus_pa: Measured,
}

impl WireStrainAnalysis {
    pub fn from_setup(setup: &WireSetup, settings: &WireErrorSettings) -> LabResult<Self> {
        ensure_same_len(
            "masses",
            setup.masses_g.len(),
            "elongations",
            setup.elongations_mm.len(),
        )?;
        let n = setup.masses_g.len();

        // Weight of each accumulated load
        let masses_kg: Array1<f64> = setup
            .cumulative_masses_g()
            .into_iter()
            .map(|m| m / 1000.0)
            .collect();
        let forces_n = masses_kg.mapv(|m| settings.gravity_m_s2 * m);
        let force_errors_n = full_error(
            n,
            scale_error(settings.gravity_m_s2, settings.mass_instrumental_g / 1000.0),
        );

        // Diameter -> radius -> cross-section
        let diameter_mm = Measured::new(
            mean(&setup.diameters_mm)?,
            quadrature(
                settings.micrometer_mm,
                standard_error_of_mean(&setup.diameters_mm),
            ),
        );
        let radius_m = diameter_mm.scaled(0.5 / 1000.0);
        let cross_section_m2 = Measured::new(
            PI * radius_m.value * radius_m.value,
            2.0 * PI * radius_m.value * radius_m.error,
        );

        let wire_length_mm = Measured::new(setup.wire_length_mm, settings.wire_length_mm);
        if wire_length_mm.value == 0.0 {
            return Err(LabError::ZeroDivisor("strain"));
        }
        let elongations_mm = Array1::from(setup.elongations_mm.clone());
        let strain = elongations_mm.mapv(|dl| dl / wire_length_mm.value);
        let strain_errors = ratio_error_array(
            &elongations_mm,
            &full_error(n, settings.elongation_mm),
            wire_length_mm,
        )?;

        log::info!(
            "Wire: d = {} mm, A = {:e} m², {} loads up to {:.3} N",
            diameter_mm.rounded(),
            cross_section_m2.value,
            n,
            forces_n.iter().copied().fold(0.0, f64::max)
        );

        Ok(Self {
            forces_n,
            force_errors_n,
            wire_length_mm,
            diameter_mm,
            radius_m,
            cross_section_m2,
            strain,
            strain_errors,
        })
    }

    /// Regresses strain on force; Hooke's law gives slope = 1 / (E * A).
    pub fn fit_strain_vs_force(&self) -> LabResult<ElasticModulusResult> {
        let series = ErrorBarSeries::new(
            self.forces_n.clone(),
            self.force_errors_n.clone(),
            self.strain.clone(),
            self.strain_errors.clone(),
        )?;
        let fit = linear_regression(series.x.view(), series.y.view())?;

        let slope = fit.slope_measured();
        let area = self.cross_section_m2;
        let stiffness = slope.value * area.value;
        if stiffness == 0.0 {
            return Err(LabError::ZeroDivisor("elastic modulus"));
        }
        let modulus = 1.0 / stiffness;
        let elastic_modulus_pa = Measured::new(
            modulus,
            modulus.abs() * relative_quadrature(&[slope, area]),
        );
        log::info!(
            "Strain vs force fit: slope = {:e} 1/N, E = {:.3e} Pa",
            fit.slope,
            modulus
        );

        Ok(ElasticModulusResult {
            series,
            fit,
            elastic_modulus_pa,
        })
    }
}


// src/data_analysis/wire_strain.rs
