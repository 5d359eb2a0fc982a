//! # Deterrent Common
//!
//! Shared types and errors for the Deterrent ranking indicator.
//!
//! ## Core Types
//!
//! - [`Population`]: aligned scores and outcome flags for a ranked population
//! - [`RankedEntity`]: one entity in ascending-score order
//!
//! ## Errors
//!
//! - [`DeterrentError`]: unified error type
//! - [`IndicatorError`]: argument and dimension failures of the computation

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{DeterrentError, IndicatorError, Result};
pub use types::population::{Population, RankedEntity};

/// Deterrent version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default monetary value per positively detected entity
pub const DEFAULT_UNIT_PRICE: f64 = 10_000.0;

/// Default top fraction used for the deterrent effect
pub const DEFAULT_TARGET_RATIO: f64 = 0.12;

/// Lower bound of a valid top fraction
pub const MIN_RATIO: f64 = 0.0;

/// Upper bound of a valid top fraction
pub const MAX_RATIO: f64 = 1.0;
