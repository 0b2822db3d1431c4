use crate::Config;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(rename = "Config")]
struct RawConfig {
    level_ceiling: usize,
    promotion_probability: f64,
    #[serde(default)]
    seed: Option<u64>,
}

impl Serialize for Config {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawConfig {
            level_ceiling: self.level_ceiling,
            promotion_probability: self.promotion_probability,
            seed: self.seed,
        }
        .serialize(serializer)
    }
}

/// Rejects configurations a list could not be built from.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        let config = Config {
            level_ceiling: raw.level_ceiling,
            promotion_probability: raw.promotion_probability,
            seed: raw.seed,
        };
        config.validate().map_err(D::Error::custom)?;
        Ok(config)
    }
}
