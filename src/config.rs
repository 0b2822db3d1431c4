use crate::error::{Error, Result};

/// Highest number of levels a node may use when none is configured.
pub const DEFAULT_LEVEL_CEILING: usize = 15;
/// Chance that a new node is promoted one more level when none is configured.
pub const DEFAULT_PROMOTION_PROBABILITY: f64 = 0.25;

/// Parameters fixed at construction of a [`SkipList`](crate::SkipList).
///
/// ```rust
/// use keyed_skiplist::{Config, SkipList};
///
/// let config = Config::default().level_ceiling(8).seed(7);
/// let list: SkipList<&str> = SkipList::from_config(config).unwrap();
/// assert_eq!(list.level_ceiling(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub level_ceiling: usize,
    pub promotion_probability: f64,
    /// Seed for the level generator. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            level_ceiling: DEFAULT_LEVEL_CEILING,
            promotion_probability: DEFAULT_PROMOTION_PROBABILITY,
            seed: None,
        }
    }
}

impl Config {
    pub fn new(level_ceiling: usize, promotion_probability: f64) -> Self {
        Config {
            level_ceiling,
            promotion_probability,
            seed: None,
        }
    }

    pub fn level_ceiling(mut self, level_ceiling: usize) -> Self {
        self.level_ceiling = level_ceiling;
        self
    }

    pub fn promotion_probability(mut self, promotion_probability: f64) -> Self {
        self.promotion_probability = promotion_probability;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_level_ceiling(self.level_ceiling)?;
        validate_promotion_probability(self.promotion_probability)
    }
}

pub(crate) fn validate_level_ceiling(level_ceiling: usize) -> Result<()> {
    if level_ceiling < 1 {
        return Err(Error::InvalidConfiguration(
            "level_ceiling must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_promotion_probability(p: f64) -> Result<()> {
    // NaN fails both comparisons, so it is rejected here too.
    if !(p >= 0.0 && p < 1.0) {
        return Err(Error::InvalidConfiguration(format!(
            "promotion_probability must lie in [0, 1), got {}",
            p
        )));
    }
    Ok(())
}
