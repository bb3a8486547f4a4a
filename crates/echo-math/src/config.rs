// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Construction-time settings for [`crate::Random`].

use crate::noise::DEFAULT_FREQUENCY;

/// Settings for the coherent noise field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NoiseConfig {
    /// Noise seed.
    pub seed: i32,
    /// Coordinate scale applied before sampling.
    pub frequency: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

/// Settings for a [`crate::Random`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RandomConfig {
    /// Stream to create and select on construction. `None` leaves the
    /// registry unseeded, so draws fail until `Random::seed` is called.
    pub initial_seed: Option<u64>,
    /// Noise field settings.
    pub noise: NoiseConfig,
}

#[cfg(feature = "serde")]
impl RandomConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// ```
    /// use echo_math::RandomConfig;
    /// let cfg = RandomConfig::from_json(r#"{ "initial_seed": 7 }"#).unwrap();
    /// assert_eq!(cfg.initial_seed, Some(7));
    /// assert_eq!(cfg.noise.seed, 0);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, crate::RandomError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialises to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, crate::RandomError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
