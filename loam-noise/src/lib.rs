//! Deterministic noise kernel for procedural world generation.
//!
//! Everything in this crate is a pure function of its inputs: the same
//! seeds and coordinates produce bit-identical output on every platform
//! and in every process. World generators rely on that to rebuild the same
//! terrain from a stored seed.
//!
//! The layers, bottom up:
//!
//! - [`random::LcgRandom`] - reproducible integer sequences
//! - [`noise::noise_2d`] / [`noise::noise_3d`] - lattice value noise
//! - [`noise::gradient_noise_2d`] / [`noise::gradient_noise_3d`] - smooth
//!   interpolation of lattice values
//! - [`noise::perlin_2d`] and friends - multi-octave synthesis
//! - [`noise::NoiseMap`] - bulk materialization into reusable buffers
//!
//! Single-point queries go through the free functions or
//! [`noise::NoiseParams::sample_2d`]; per-chunk bulk generation goes
//! through [`noise::NoiseMap`], which allocates its buffers once and fills
//! them in place on every call.

pub mod math;
pub mod noise;
pub mod random;

pub use noise::{NoiseMap, NoiseParams};
pub use random::LcgRandom;
