// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: float32 vector algebra, scalar helpers, and seeded randomness.
//!
//! The crate is split into three layers:
//! - [`scalar`]: stateless float32 helpers (clamp, lerp, smoothstep, trig).
//! - [`Vec2`] / [`Vec3`]: value-type vectors built on the scalar helpers.
//! - [`Random`]: an explicit registry of independent seeded streams plus a
//!   coherent [`SimplexNoise`] field.
//!
//! Nothing in this crate uses global mutable state. Each [`Random`] is an
//! ordinary value owned by its caller; give every thread or task its own
//! registry, or wrap a shared one in your own synchronisation.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

/// Stateless float32 helpers and angle constants.
pub mod scalar;

mod config;
mod noise;
mod prng;
mod random;
mod vec2;
mod vec3;

pub use config::{NoiseConfig, RandomConfig};
pub use noise::{NoiseGenerator, SimplexNoise};
pub use prng::Prng;
pub use random::{Random, RandomError, SampleUniform};
pub use vec2::Vec2;
pub use vec3::Vec3;
