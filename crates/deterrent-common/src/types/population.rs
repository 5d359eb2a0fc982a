//! Population - scored entities with binary outcome flags
//!
//! A population pairs one ranking score with one outcome flag per entity.
//! Alignment is positional: `scores[i]` and `flags[i]` describe the same
//! entity. Lower scores rank higher, so the "top" of a population is its
//! lowest-scored entities.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// One entity in ranking order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedEntity {
    /// Position of the entity in the original sequences
    pub position: usize,
    /// Ranking score
    pub score: f64,
    /// Positive outcome flag
    pub flag: bool,
}

/// Scores and outcome flags for a ranked population
///
/// Fields are public and may be replaced at any time; alignment is only
/// checked when a ranking is requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    /// Ranking score per entity (lower = higher priority)
    pub scores: Vec<f64>,
    /// Positive outcome flag per entity
    pub flags: Vec<bool>,
}

impl Population {
    /// Create a population from parallel score and flag sequences
    pub fn new(scores: Vec<f64>, flags: Vec<bool>) -> Self {
        Self { scores, flags }
    }

    /// Create a population from `(score, flag)` pairs, aligned by construction
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, bool)>,
    {
        let (scores, flags) = pairs.into_iter().unzip();
        Self { scores, flags }
    }

    /// Create a population from 0/1 outcome indicators; any non-zero value is positive
    pub fn from_indicator_flags(scores: Vec<f64>, indicators: &[u8]) -> Self {
        Self {
            scores,
            flags: indicators.iter().map(|&v| v != 0).collect(),
        }
    }

    /// Number of scored entities
    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of entities flagged positive
    pub fn positive_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Fraction of entities flagged positive (0.0 for an empty population)
    pub fn positive_rate(&self) -> f64 {
        if self.flags.is_empty() {
            return 0.0;
        }
        self.positive_count() as f64 / self.flags.len() as f64
    }

    /// Fail with `DimensionMismatch` unless scores and flags have equal length
    pub fn check_aligned(&self) -> Result<()> {
        if self.scores.len() != self.flags.len() {
            return Err(IndicatorError::DimensionMismatch {
                scores: self.scores.len(),
                flags: self.flags.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Entities in ascending score order.
    ///
    /// The sort is stable, so equal scores keep their original relative
    /// order. Scores compare by IEEE total order; NaN sorts last.
    pub fn ranked(&self) -> Result<Vec<RankedEntity>> {
        self.check_aligned()?;

        let mut entities: Vec<RankedEntity> = self
            .scores
            .iter()
            .zip(self.flags.iter())
            .enumerate()
            .map(|(position, (&score, &flag))| RankedEntity { position, score, flag })
            .collect();

        entities.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(entities)
    }
}

impl FromIterator<(f64, bool)> for Population {
    fn from_iter<I: IntoIterator<Item = (f64, bool)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
