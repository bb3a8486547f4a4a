// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Seeded coherent noise.
//!
//! [`SimplexNoise`] evaluates 2D and 3D simplex noise over a permutation table
//! shuffled by a [`Prng`] stream derived from the noise seed. Output is
//! continuous in the input coordinates and stays within `[-1, 1]`.

use crate::Prng;

/// Frequency applied to coordinates when none is configured.
pub const DEFAULT_FREQUENCY: f32 = 0.01;

/// A scalar field that can be sampled in two or three dimensions.
pub trait NoiseGenerator {
    /// Samples the field at `(x, y)`.
    fn sample_2d(&self, x: f32, y: f32) -> f32;

    /// Samples the field at `(x, y, z)`.
    fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32;
}

const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

// Skew/unskew factors: (sqrt(3) - 1) / 2 and (3 - sqrt(3)) / 6.
const F2: f32 = 0.366_025_42;
const G2: f32 = 0.211_324_87;
const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

const SCALE_2D: f32 = 70.0;
const SCALE_3D: f32 = 76.0;

/// Seeded 2D/3D simplex noise field.
///
/// Two instances with the same seed and frequency return bit-identical
/// samples. Reseeding rebuilds the permutation table from scratch, so the
/// field depends only on the current seed, never on earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexNoise {
    seed: i32,
    frequency: f32,
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Creates a field for `seed` at [`DEFAULT_FREQUENCY`].
    pub fn new(seed: i32) -> Self {
        Self::with_frequency(seed, DEFAULT_FREQUENCY)
    }

    /// Creates a field for `seed`; coordinates are multiplied by `frequency`
    /// before sampling.
    pub fn with_frequency(seed: i32, frequency: f32) -> Self {
        Self {
            seed,
            frequency,
            perm: build_permutation(seed),
        }
    }

    /// Current seed.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Replaces the seed and rebuilds the permutation table.
    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
        self.perm = build_permutation(seed);
    }

    /// Coordinate scale.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Sets the coordinate scale.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    fn hash(&self, idx: usize) -> usize {
        usize::from(self.perm[idx])
    }

    #[allow(clippy::cast_precision_loss)]
    fn simplex_2d(&self, x: f32, y: f32) -> f32 {
        let s = (x + y) * F2;
        let i = fast_floor(x + s);
        let j = fast_floor(y + s);
        let t = (i as f32 + j as f32) * G2;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);

        // Lower or upper triangle of the skewed cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = wrap(i);
        let jj = wrap(j);
        let gi0 = self.hash(ii + self.hash(jj)) % 12;
        let gi1 = self.hash(ii + i1 + self.hash(jj + j1)) % 12;
        let gi2 = self.hash(ii + 1 + self.hash(jj + 1)) % 12;

        let n0 = corner_2d(gi0, x0, y0);
        let n1 = corner_2d(gi1, x1, y1);
        let n2 = corner_2d(gi2, x2, y2);

        (SCALE_2D * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn simplex_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let s = (x + y + z) * F3;
        let i = fast_floor(x + s);
        let j = fast_floor(y + s);
        let k = fast_floor(z + s);
        let t = (i as f32 + j as f32 + k as f32) * G3;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);
        let z0 = z - (k as f32 - t);

        // Pick the tetrahedron of the skewed cube that contains the point.
        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - i1 as f32 + G3;
        let y1 = y0 - j1 as f32 + G3;
        let z1 = z0 - k1 as f32 + G3;
        let x2 = x0 - i2 as f32 + 2.0 * G3;
        let y2 = y0 - j2 as f32 + 2.0 * G3;
        let z2 = z0 - k2 as f32 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = wrap(i);
        let jj = wrap(j);
        let kk = wrap(k);
        let gi0 = self.hash(ii + self.hash(jj + self.hash(kk))) % 12;
        let gi1 = self.hash(ii + i1 + self.hash(jj + j1 + self.hash(kk + k1))) % 12;
        let gi2 = self.hash(ii + i2 + self.hash(jj + j2 + self.hash(kk + k2))) % 12;
        let gi3 = self.hash(ii + 1 + self.hash(jj + 1 + self.hash(kk + 1))) % 12;

        let n0 = corner_3d(gi0, x0, y0, z0);
        let n1 = corner_3d(gi1, x1, y1, z1);
        let n2 = corner_3d(gi2, x2, y2, z2);
        let n3 = corner_3d(gi3, x3, y3, z3);

        (SCALE_3D * (n0 + n1 + n2 + n3)).clamp(-1.0, 1.0)
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseGenerator for SimplexNoise {
    fn sample_2d(&self, x: f32, y: f32) -> f32 {
        self.simplex_2d(x * self.frequency, y * self.frequency)
    }

    fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.simplex_3d(
            x * self.frequency,
            y * self.frequency,
            z * self.frequency,
        )
    }
}

/// Fisher-Yates shuffle of `0..=255`, doubled so lookups never need to wrap.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
fn build_permutation(seed: i32) -> [u8; 512] {
    let mut prng = Prng::from_seed_u64(u64::from(u32::from_le_bytes(seed.to_le_bytes())));
    let mut table: [u8; 256] = core::array::from_fn(|i| i as u8);
    for i in (1..table.len()).rev() {
        let j = prng.next_int(0, i as i32) as usize;
        table.swap(i, j);
    }
    core::array::from_fn(|i| table[i & 255])
}

#[allow(clippy::cast_possible_truncation)]
fn fast_floor(value: f32) -> i32 {
    value.floor() as i32
}

#[allow(clippy::cast_sign_loss)]
fn wrap(cell: i32) -> usize {
    (cell & 255) as usize
}

fn corner_2d(gi: usize, x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let g = GRAD3[gi];
    let t2 = t * t;
    t2 * t2 * (g[0] * x + g[1] * y)
}

fn corner_3d(gi: usize, x: f32, y: f32, z: f32) -> f32 {
    let t = 0.5 - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    let g = GRAD3[gi];
    let t2 = t * t;
    t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
}
