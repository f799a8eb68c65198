// src/plot_functions/mod.rs

pub mod plot_distance_vs_time_squared;
pub mod plot_strain_vs_force;

// src/plot_functions/mod.rs
