//! Data sources other than user input.

pub mod sample;

pub use sample::{SampleConfig, generate_sample};
