// src/data_input/json_loader.rs

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::data_input::measurements::{TimedSample, WireSetup};
use crate::error::{LabError, LabResult};

fn read_json(input_file_path: &Path) -> LabResult<Value> {
    let text = fs::read_to_string(input_file_path).map_err(|source| LabError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Extracts the measurement set stored under `key` from an already parsed document.
pub fn timed_samples_from_value(document: &Value, key: &str) -> LabResult<Vec<TimedSample>> {
    let set = document
        .get(key)
        .ok_or_else(|| LabError::MissingKey(key.to_string()))?;
    let samples: Vec<TimedSample> = serde_json::from_value(set.clone())?;
    if samples.is_empty() {
        return Err(LabError::InsufficientData {
            what: "measurement set",
            needed: 1,
            got: 0,
        });
    }
    Ok(samples)
}

/// Loads the timed-distance measurements stored under `key`.
///
/// The file holds an object whose keys name measurement sets, each a list of
/// `{"distancia_cm": .., "tempos_s": [..]}` entries.
pub fn load_timed_samples(input_file_path: &Path, key: &str) -> LabResult<Vec<TimedSample>> {
    let document = read_json(input_file_path)?;
    let samples = timed_samples_from_value(&document, key)?;
    log::info!(
        "Loaded {} timed samples from '{}' [{}]",
        samples.len(),
        input_file_path.display(),
        key
    );
    for (i, sample) in samples.iter().enumerate() {
        log::debug!(
            "  sample {}: {} cm, {} readings",
            i + 1,
            sample.distance_cm,
            sample.times_s.len()
        );
    }
    Ok(samples)
}

/// Loads the wire experiment readings.
pub fn load_wire_setup(input_file_path: &Path) -> LabResult<WireSetup> {
    let document = read_json(input_file_path)?;
    let setup: WireSetup = serde_json::from_value(document)?;
    log::info!(
        "Loaded wire setup from '{}': L0 = {} mm, {} diameter readings, {} loads",
        input_file_path.display(),
        setup.wire_length_mm,
        setup.diameters_mm.len(),
        setup.masses_g.len()
    );
    Ok(setup)
}


// src/data_input/json_loader.rs
