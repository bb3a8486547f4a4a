// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Stateful `xoroshiro128+` pseudo-random number generator backing one stream.
///
/// * Not cryptographically secure.
/// * Matching seeds yield identical sequences across supported platforms; the
///   sequence depends only on the seed and on the number and kind of draws
///   made against this instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prng {
    state: [u64; 2],
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Constructs a PRNG from two raw 64-bit state words.
    ///
    /// The all-zero state is a fixed point of xoroshiro and is replaced by a
    /// non-zero constant.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(GOLDEN_GAMMA);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let s0 = splitmix64(&mut sm_state);
        let s1 = splitmix64(&mut sm_state);
        Self::from_seed(s0, s1)
    }

    /// Advances the generator and returns the raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// The high 23 bits of the output fill the mantissa of a float in
    /// `[1, 2)`, which is then shifted down by one.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Returns the next double in `[0, 1)` using the high 52 bits.
    pub fn next_f64(&mut self) -> f64 {
        let raw = self.next_u64();
        let bits = (raw >> 12) | 0x3ff0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    /// Returns the next float in the half-open range `[min, max)`.
    ///
    /// Consumes exactly one draw. When `min == max` the result is `min`.
    /// Callers must order the bounds; an inverted range is not checked here.
    pub fn next_range_f32(&mut self, min: f32, max: f32) -> f32 {
        let value = min + (max - min) * self.next_f32();
        // Rounding can land exactly on `max` for wide ranges.
        if value < max || min >= max {
            value
        } else {
            max.next_down()
        }
    }

    /// Double-precision counterpart of [`Prng::next_range_f32`].
    pub fn next_range_f64(&mut self, min: f64, max: f64) -> f64 {
        let value = min + (max - min) * self.next_f64();
        if value < max || min >= max {
            value
        } else {
            max.next_down()
        }
    }

    /// Returns the next integer in the inclusive range `[min, max]`.
    ///
    /// Uses rejection sampling to avoid modulo bias, ensuring every value in
    /// the range is produced with equal probability.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "invalid range: {min}..={max}");
        let span = (i64::from(max) - i64::from(min)) as u64 + 1;
        if span == 1 {
            return min;
        }

        let value = if span.is_power_of_two() {
            self.next_u64() & (span - 1)
        } else {
            let bound = u64::MAX - u64::MAX % span;
            loop {
                let candidate = self.next_u64();
                if candidate < bound {
                    break candidate % span;
                }
            }
        };

        (value as i64 + i64::from(min)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_int_returns_single_value_for_equal_bounds() {
        let mut prng = Prng::from_seed(42, 99);
        assert_eq!(prng.next_int(7, 7), 7);
    }

    #[test]
    fn next_int_handles_full_i32_range() {
        let mut prng = Prng::from_seed(0xDEADBEEF, 0xFACEFEED);
        let values: Vec<i32> = (0..3).map(|_| prng.next_int(i32::MIN, i32::MAX)).collect();
        assert_eq!(values, vec![1501347292, 1946982111, -117316573]);
    }

    #[test]
    fn next_int_handles_negative_ranges() {
        let mut prng = Prng::from_seed(123, 456);
        let values: Vec<i32> = (0..3).map(|_| prng.next_int(-10, -3)).collect();
        assert_eq!(values, vec![-7, -7, -7]);
    }

    #[test]
    fn zero_state_is_replaced() {
        let mut prng = Prng::from_seed(0, 0);
        assert_ne!(prng.next_u64(), 0);
    }

    #[test]
    fn unit_floats_stay_in_half_open_interval() {
        let mut prng = Prng::from_seed_u64(7);
        for _ in 0..10_000 {
            let f = prng.next_f32();
            assert!((0.0..1.0).contains(&f));
            let d = prng.next_f64();
            assert!((0.0..1.0).contains(&d));
        }
    }

    #[test]
    fn range_draws_respect_bounds_and_degenerate_width() {
        let mut prng = Prng::from_seed_u64(99);
        for _ in 0..10_000 {
            let v = prng.next_range_f32(-2.5, 4.0);
            assert!((-2.5..4.0).contains(&v));
        }
        assert_eq!(prng.next_range_f32(3.0, 3.0), 3.0);
        assert_eq!(prng.next_range_f64(-1.0, -1.0), -1.0);
    }

    #[test]
    fn from_seed_u64_is_reproducible() {
        let mut a = Prng::from_seed_u64(0x1234);
        let mut b = Prng::from_seed_u64(0x1234);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        assert_ne!(Prng::from_seed_u64(1), Prng::from_seed_u64(2));
    }
}
