// src/data_input/measurements.rs

use serde::Deserialize;

/// One drop height with its repeated stopwatch readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimedSample {
    #[serde(rename = "distancia_cm", alias = "distance_cm")]
    pub distance_cm: f64,
    #[serde(rename = "tempos_s", alias = "times_s")]
    pub times_s: Vec<f64>,
}

/// Raw readings for the loaded-wire (elastic modulus) experiment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireSetup {
    /// Unloaded wire length L0 (mm).
    pub wire_length_mm: f64,
    /// Repeated micrometer readings of the diameter (mm).
    pub diameters_mm: Vec<f64>,
    /// Elongation after each added load (mm).
    pub elongations_mm: Vec<f64>,
    /// Individual slotted masses in the order they are hung (g).
    pub masses_g: Vec<f64>,
}

impl WireSetup {
    /// Running sum of the hung masses: load `k` carries masses `0..=k`.
    pub fn cumulative_masses_g(&self) -> Vec<f64> {
        self.masses_g
            .iter()
            .scan(0.0, |total, m| {
                *total += m;
                Some(*total)
            })
            .collect()
    }
}


// src/data_input/measurements.rs
