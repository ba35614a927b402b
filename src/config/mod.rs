//! Configuration loading and management for the Term Results Engine.
//!
//! This module provides functionality to load school configuration from
//! YAML files: the grading scale sets, the failing-grade set, and the
//! academic calendar with its holidays.
//!
//! # Example
//!
//! ```no_run
//! use results_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/school").unwrap();
//! println!("Loaded {} grading bands", config.grading().scales.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, GradingConfig, GradingScaleEntry, ScaleSet};
