//! Smoothly interpolated lattice noise and multi-octave synthesis.
//!
//! Continuous coordinates are split into a lattice cell and a fractional
//! part; the cell's corner values come from `value` and are blended with
//! the quintic easing weight from [`crate::math::smoothstep`], so maps
//! stitched from adjacent regions share values and derivatives at lattice
//! boundaries.

use super::value::{noise_2d, noise_3d};
use crate::math::{floor, lerp2, lerp3, smoothstep};

/// Sample 2D gradient noise at a continuous coordinate.
///
/// Blends the four surrounding lattice values. At integer coordinates the
/// result equals the lattice value itself.
#[must_use]
pub fn gradient_noise_2d(x: f32, y: f32, seed: i32) -> f32 {
    let x0 = floor(x);
    let y0 = floor(y);
    let xl = x - x0 as f32;
    let yl = y - y0 as f32;

    let v00 = noise_2d(x0, y0, seed);
    let v10 = noise_2d(x0.wrapping_add(1), y0, seed);
    let v01 = noise_2d(x0, y0.wrapping_add(1), seed);
    let v11 = noise_2d(x0.wrapping_add(1), y0.wrapping_add(1), seed);

    lerp2(smoothstep(xl), smoothstep(yl), v00, v10, v01, v11)
}

/// Sample 3D gradient noise at a continuous coordinate.
///
/// Blends the eight surrounding lattice values.
#[must_use]
pub fn gradient_noise_3d(x: f32, y: f32, z: f32, seed: i32) -> f32 {
    let x0 = floor(x);
    let y0 = floor(y);
    let z0 = floor(z);
    let xl = x - x0 as f32;
    let yl = y - y0 as f32;
    let zl = z - z0 as f32;

    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let v000 = noise_3d(x0, y0, z0, seed);
    let v100 = noise_3d(x1, y0, z0, seed);
    let v010 = noise_3d(x0, y1, z0, seed);
    let v110 = noise_3d(x1, y1, z0, seed);
    let v001 = noise_3d(x0, y0, z1, seed);
    let v101 = noise_3d(x1, y0, z1, seed);
    let v011 = noise_3d(x0, y1, z1, seed);
    let v111 = noise_3d(x1, y1, z1, seed);

    lerp3(
        smoothstep(xl),
        smoothstep(yl),
        smoothstep(zl),
        v000,
        v100,
        v010,
        v110,
        v001,
        v101,
        v011,
        v111,
    )
}

/// Sum `octaves` octaves of 2D gradient noise.
///
/// Octave `i` samples at coordinates scaled by `2^i` with seed `seed + i`,
/// weighted by `persistence^i`. The sum is deliberately not renormalized
/// by the total amplitude, so magnitudes can exceed `[-1, 1]` when
/// `persistence` approaches 1.
#[must_use]
pub fn perlin_2d(x: f32, y: f32, seed: i32, octaves: u32, persistence: f32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    for i in 0..octaves {
        let octave_seed = seed.wrapping_add(i as i32);
        total += amplitude * gradient_noise_2d(x * frequency, y * frequency, octave_seed);
        frequency *= 2.0;
        amplitude *= persistence;
    }
    total
}

/// [`perlin_2d`] with each octave rectified before weighting.
///
/// Rectification folds every octave into `[0, 1]`, which produces
/// ridge-like rather than smoothly rolling fields.
#[must_use]
pub fn perlin_2d_abs(x: f32, y: f32, seed: i32, octaves: u32, persistence: f32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    for i in 0..octaves {
        let octave_seed = seed.wrapping_add(i as i32);
        total += amplitude * gradient_noise_2d(x * frequency, y * frequency, octave_seed).abs();
        frequency *= 2.0;
        amplitude *= persistence;
    }
    total
}

/// Sum `octaves` octaves of 3D gradient noise.
#[must_use]
pub fn perlin_3d(x: f32, y: f32, z: f32, seed: i32, octaves: u32, persistence: f32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    for i in 0..octaves {
        let octave_seed = seed.wrapping_add(i as i32);
        total += amplitude
            * gradient_noise_3d(x * frequency, y * frequency, z * frequency, octave_seed);
        frequency *= 2.0;
        amplitude *= persistence;
    }
    total
}

/// [`perlin_3d`] with each octave rectified before weighting.
#[must_use]
pub fn perlin_3d_abs(x: f32, y: f32, z: f32, seed: i32, octaves: u32, persistence: f32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    for i in 0..octaves {
        let octave_seed = seed.wrapping_add(i as i32);
        total += amplitude
            * gradient_noise_3d(x * frequency, y * frequency, z * frequency, octave_seed).abs();
        frequency *= 2.0;
        amplitude *= persistence;
    }
    total
}
