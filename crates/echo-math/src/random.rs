// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{NoiseGenerator, Prng, RandomConfig, SimplexNoise, Vec2, Vec3};

/// Errors returned by [`Random`] draws and configuration.
#[derive(Debug, Error)]
pub enum RandomError {
    /// A draw was attempted while the selected seed has no stream.
    #[error("no random stream for seed {seed}; call `Random::seed` first")]
    UnseededStream {
        /// The selected seed.
        seed: u64,
    },
    /// `min` is greater than `max`, or the bounds are unordered (`NaN`).
    #[error("inverted range: min {min} is not <= max {max}")]
    InvertedRange {
        /// Lower bound as given.
        min: String,
        /// Upper bound as given.
        max: String,
    },
    /// Configuration text could not be parsed.
    #[cfg(feature = "serde")]
    #[error("invalid random config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Numeric types that can be drawn uniformly from a [`Prng`].
///
/// Integers draw from the closed range `[min, max]`; reals draw from the
/// half-open range `[min, max)`. Every draw advances the stream exactly once
/// for reals, and at least once for integers (rejection sampling).
pub trait SampleUniform: Copy + PartialOrd + fmt::Display {
    /// Draws one value between `min` and `max`. Bounds are already ordered.
    fn sample(prng: &mut Prng, min: Self, max: Self) -> Self;
}

impl SampleUniform for i32 {
    fn sample(prng: &mut Prng, min: Self, max: Self) -> Self {
        prng.next_int(min, max)
    }
}

impl SampleUniform for f32 {
    fn sample(prng: &mut Prng, min: Self, max: Self) -> Self {
        prng.next_range_f32(min, max)
    }
}

impl SampleUniform for f64 {
    fn sample(prng: &mut Prng, min: Self, max: Self) -> Self {
        prng.next_range_f64(min, max)
    }
}

/// Registry of independent seeded streams plus one coherent noise field.
///
/// * [`Random::seed`] selects a stream, creating it on first use. Selecting
///   an existing seed never resets its progression.
/// * Draws consult the selected stream only, so a stream's sequence depends
///   solely on its seed and on the draws made against it.
/// * Drawing before any stream is selected fails with
///   [`RandomError::UnseededStream`]; no stream is created implicitly.
/// * The noise field is independent of the streams.
///
/// The registry is a plain value without interior mutability. Share it across
/// threads only behind your own lock, or give each thread its own.
#[derive(Debug, Clone, Default)]
pub struct Random {
    streams: FxHashMap<u64, Prng>,
    current_seed: u64,
    noise: SimplexNoise,
}

impl Random {
    /// Empty registry: no streams, selected seed 0, noise seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `config`.
    ///
    /// When `config.initial_seed` is set that stream is created and selected
    /// up front, so draws work without an explicit [`Random::seed`] call.
    pub fn with_config(config: &RandomConfig) -> Self {
        let mut random = Self {
            streams: FxHashMap::default(),
            current_seed: 0,
            noise: SimplexNoise::with_frequency(config.noise.seed, config.noise.frequency),
        };
        if let Some(seed) = config.initial_seed {
            random.seed(seed);
        }
        random
    }

    /// Selects the stream for `seed`, creating it if needed.
    pub fn seed(&mut self, seed: u64) {
        self.current_seed = seed;
        if self.streams.contains_key(&seed) {
            trace!(seed, "selected existing random stream");
            return;
        }
        self.streams.insert(seed, Prng::from_seed_u64(seed));
        debug!(seed, streams = self.streams.len(), "created random stream");
    }

    /// Currently selected seed.
    pub fn current_seed(&self) -> u64 {
        self.current_seed
    }

    /// Whether a stream exists for `seed`.
    pub fn has_stream(&self, seed: u64) -> bool {
        self.streams.contains_key(&seed)
    }

    /// Number of streams created so far.
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Draws a uniform value from the selected stream.
    ///
    /// Integer types use `[min, max]`, real types `[min, max)`.
    pub fn value<T: SampleUniform>(&mut self, min: T, max: T) -> Result<T, RandomError> {
        let stream = self.checked_stream(min, max)?;
        Ok(T::sample(stream, min, max))
    }

    /// Uniform integer in `[min, max]`.
    pub fn value_i32(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        self.value(min, max)
    }

    /// Uniform float in `[min, max)`.
    pub fn value_f32(&mut self, min: f32, max: f32) -> Result<f32, RandomError> {
        self.value(min, max)
    }

    /// Two draws in `[min, max)`, assigned to `x` then `y`.
    pub fn vector2(&mut self, min: f32, max: f32) -> Result<Vec2, RandomError> {
        let stream = self.checked_stream(min, max)?;
        let x = stream.next_range_f32(min, max);
        let y = stream.next_range_f32(min, max);
        Ok(Vec2::new(x, y))
    }

    /// Three draws in `[min, max)`, assigned to `x`, `y`, then `z`.
    pub fn vector3(&mut self, min: f32, max: f32) -> Result<Vec3, RandomError> {
        let stream = self.checked_stream(min, max)?;
        let x = stream.next_range_f32(min, max);
        let y = stream.next_range_f32(min, max);
        let z = stream.next_range_f32(min, max);
        Ok(Vec3::new(x, y, z))
    }

    /// Reseeds the noise field. Does not touch any stream.
    pub fn set_noise_seed(&mut self, seed: i32) {
        self.noise.set_seed(seed);
        debug!(seed, "reseeded noise field");
    }

    /// Seed of the noise field.
    pub fn noise_seed(&self) -> i32 {
        self.noise.seed()
    }

    /// Sets the coordinate scale of the noise field.
    pub fn set_noise_frequency(&mut self, frequency: f32) {
        self.noise.set_frequency(frequency);
    }

    /// The noise field.
    pub fn noise(&self) -> &SimplexNoise {
        &self.noise
    }

    /// Samples the noise field at `(x, y)`; roughly in `[-1, 1]`.
    pub fn noise_2d(&self, x: f32, y: f32) -> f32 {
        self.noise.sample_2d(x, y)
    }

    /// Samples the noise field at `(x, y, z)`; roughly in `[-1, 1]`.
    pub fn noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.noise.sample_3d(x, y, z)
    }

    fn checked_stream<T: SampleUniform>(
        &mut self,
        min: T,
        max: T,
    ) -> Result<&mut Prng, RandomError> {
        if !matches!(
            min.partial_cmp(&max),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            warn!(%min, %max, "rejected draw with inverted range");
            return Err(RandomError::InvertedRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let seed = self.current_seed;
        self.streams.get_mut(&seed).ok_or_else(|| {
            warn!(seed, "rejected draw against unseeded stream");
            RandomError::UnseededStream { seed }
        })
    }
}
