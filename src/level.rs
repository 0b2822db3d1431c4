//! Level assignment for new nodes.
//!
//! Every node sits on level 1. Each further level is reached with probability
//! `p`, so a node reaches level `k` with probability `p^(k-1)`, capped at the
//! level ceiling.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::config::{validate_level_ceiling, validate_promotion_probability, Config};
use crate::error::Result;

/// Coin-flip level generator owning a single PRNG, seeded once.
pub struct LevelGenerator {
    level_ceiling: usize,
    promotion_probability: f64,
    rng: StdRng,
}

impl LevelGenerator {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(LevelGenerator {
            level_ceiling: config.level_ceiling,
            promotion_probability: config.promotion_probability,
            rng,
        })
    }

    /// Returns a level in `1..=level_ceiling`.
    pub fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.level_ceiling && self.rng.gen::<f64>() < self.promotion_probability {
            level += 1;
        }
        level
    }

    #[inline]
    pub fn level_ceiling(&self) -> usize {
        self.level_ceiling
    }

    #[inline]
    pub fn promotion_probability(&self) -> f64 {
        self.promotion_probability
    }

    pub(crate) fn set_level_ceiling(&mut self, level_ceiling: usize) -> Result<()> {
        validate_level_ceiling(level_ceiling)?;
        self.level_ceiling = level_ceiling;
        Ok(())
    }

    pub(crate) fn set_promotion_probability(&mut self, p: f64) -> Result<()> {
        validate_promotion_probability(p)?;
        self.promotion_probability = p;
        Ok(())
    }
}
