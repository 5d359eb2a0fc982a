//! Core types for the Deterrent indicator

pub mod population;

pub use population::{Population, RankedEntity};
