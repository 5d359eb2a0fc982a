//! # Deterrent Indicator
//!
//! Ranking-quality indicator for scored populations.
//!
//! ## Precision at k
//!
//! ```text
//! target = floor(n × k)
//! P@k    = positives(lowest-scored target entities) / target
//! ```
//!
//! ## Deterrent Effect
//!
//! ```text
//! D = P@target_ratio × unit_price
//! ```
//!
//! Lower scores rank higher: the top of the population is its lowest-scored
//! entities. Empty populations and empty selections yield 0.

pub mod config;
pub mod indicator;

pub use config::IndicatorConfig;
pub use deterrent_common::{DeterrentError, IndicatorError, Population, RankedEntity, Result};
pub use indicator::{IndicatorSummary, RankingIndicator};
