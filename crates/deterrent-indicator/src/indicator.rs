//! Ranking indicator: precision at k and deterrent effect

use deterrent_common::{IndicatorError, Population, Result, MAX_RATIO, MIN_RATIO};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::IndicatorConfig;

/// Precision-at-k indicator over a scored population.
///
/// All fields are public; callers may replace the configuration, the
/// scores or the flags between computations. Computations never mutate
/// the indicator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingIndicator {
    /// Pricing and target-ratio settings
    pub config: IndicatorConfig,
    /// Scores and outcome flags being evaluated
    pub population: Population,
}

/// Serializable snapshot of the indicator at its configured target ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    /// Number of scored entities
    pub population: usize,
    /// Number of entities flagged positive
    pub positives: usize,
    /// Overall positive rate (0.0 - 1.0)
    pub positive_rate: f64,
    /// Top fraction evaluated
    pub target_ratio: f64,
    /// Entities selected at the target ratio
    pub target_count: usize,
    /// Precision at the target ratio
    pub precision: f64,
    /// Monetary value per positive detection
    pub unit_price: f64,
    /// precision × unit_price
    pub deterrent_effect: f64,
}

impl RankingIndicator {
    /// Create an indicator from parallel score and flag sequences
    pub fn new(config: IndicatorConfig, scores: Vec<f64>, flags: Vec<bool>) -> Self {
        Self::with_population(config, Population::new(scores, flags))
    }

    pub fn with_population(config: IndicatorConfig, population: Population) -> Self {
        Self { config, population }
    }

    /// Scores of the population
    #[inline]
    pub fn scores(&self) -> &[f64] {
        &self.population.scores
    }

    /// Outcome flags of the population
    #[inline]
    pub fn flags(&self) -> &[bool] {
        &self.population.flags
    }

    /// Number of entities selected for top fraction `k`: floor(n × k).
    ///
    /// Fails with `InvalidArgument` for k outside [0, 1] and with
    /// `DimensionMismatch` when scores and flags differ in length.
    pub fn target_count(&self, k: f64) -> Result<usize> {
        if !(MIN_RATIO..=MAX_RATIO).contains(&k) {
            return Err(IndicatorError::ratio_out_of_range("k", k).into());
        }
        self.population.check_aligned()?;

        // Truncating cast, n × k is non-negative here
        Ok((self.population.len() as f64 * k) as usize)
    }

    /// Fraction of the lowest-scored floor(n × k) entities flagged positive.
    ///
    /// Returns 0.0 for an empty population or an empty selection.
    #[instrument(skip(self), fields(population = self.population.len()))]
    pub fn precision_at_k(&self, k: f64) -> Result<f64> {
        let selected = self.target_count(k)?;
        if selected == 0 {
            debug!("Empty selection");
            return Ok(0.0);
        }

        let ranked = self.population.ranked()?;
        let positives = ranked.iter().take(selected).filter(|e| e.flag).count();
        let precision = positives as f64 / selected as f64;

        debug!(selected, positives, precision, "Computed precision");
        Ok(precision)
    }

    /// Precision at the configured target ratio, scaled by the unit price
    #[instrument(skip(self))]
    pub fn deterrent_effect(&self) -> Result<f64> {
        let precision = self.precision_at_k(self.config.target_ratio)?;
        let effect = precision * self.config.unit_price;

        debug!(
            target_ratio = self.config.target_ratio,
            unit_price = self.config.unit_price,
            effect,
            "Computed deterrent effect"
        );
        Ok(effect)
    }

    /// Precision at each requested fraction, paired with the fraction.
    ///
    /// Fails on the first invalid fraction.
    pub fn precision_curve(&self, ks: &[f64]) -> Result<Vec<(f64, f64)>> {
        ks.iter()
            .map(|&k| self.precision_at_k(k).map(|p| (k, p)))
            .collect()
    }

    /// Snapshot of the indicator at its configured target ratio
    pub fn summary(&self) -> Result<IndicatorSummary> {
        let target_count = self.target_count(self.config.target_ratio)?;
        let precision = self.precision_at_k(self.config.target_ratio)?;

        Ok(IndicatorSummary {
            population: self.population.len(),
            positives: self.population.positive_count(),
            positive_rate: self.population.positive_rate(),
            target_ratio: self.config.target_ratio,
            target_count,
            precision,
            unit_price: self.config.unit_price,
            deterrent_effect: precision * self.config.unit_price,
        })
    }
}

impl std::fmt::Display for IndicatorSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Indicator(n={}, top {}/{} at k={:.2}, precision={:.3}, effect={:.2})",
            self.population,
            self.target_count,
            self.population,
            self.target_ratio,
            self.precision,
            self.deterrent_effect
        )
    }
}
