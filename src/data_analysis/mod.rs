// src/data_analysis/mod.rs

pub mod distance_time;
pub mod propagation;
pub mod regression;
pub mod significant;
pub mod wire_strain;

// src/data_analysis/mod.rs
