// src/lib.rs - Library interface for the analysis pipeline and plot rendering

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;
pub mod types;

pub use error::{LabError, LabResult};

// Crate version; a build-time VERGEN_GIT_SEMVER takes precedence when present.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
