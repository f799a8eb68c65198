// src/data_input/mod.rs

pub mod json_loader;
pub mod measurements;

// src/data_input/mod.rs
