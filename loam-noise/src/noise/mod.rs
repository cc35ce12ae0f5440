//! Noise generation for terrain and density fields.
//!
//! This module provides the noise primitives world generation is built on:
//!
//! - [`noise_2d`] / [`noise_3d`] - lattice value noise, a pure integer hash
//! - [`gradient_noise_2d`] / [`gradient_noise_3d`] - lattice noise smoothly
//!   interpolated between grid points
//! - [`perlin_2d`], [`perlin_3d`] and the `_abs` variants - multi-octave
//!   synthesis
//! - [`NoiseParams`] - octave shaping configuration
//! - [`NoiseMap`] - bulk materialization over 2D/3D grids with reusable
//!   buffers

mod gradient;
mod map;
mod params;
mod value;

pub use gradient::{
    gradient_noise_2d, gradient_noise_3d, perlin_2d, perlin_2d_abs, perlin_3d, perlin_3d_abs,
};
pub use map::NoiseMap;
pub use params::NoiseParams;
pub use value::{noise_2d, noise_3d};
