//! Octave shaping configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::gradient::{perlin_2d, perlin_3d};

/// Configuration describing how octaves are shaped and combined.
///
/// `spread` converts world coordinates into lattice coordinates: the first
/// octave's features are roughly `spread` world units across, and each
/// further octave halves that. One `NoiseParams` value is typically built
/// per field (terrain height, cave density, humidity) and shared by every
/// materializer and point query of that field; a
/// [`NoiseMap`](super::NoiseMap) borrows it for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Constant added to the scaled octave sum.
    pub offset: f32,
    /// Multiplier applied to the octave sum before `offset` is added.
    pub scale: f32,
    /// Per-axis feature size of the first octave, in world units.
    pub spread: Vec3,
    /// Base seed, combined additively with caller seeds and octave indices.
    pub seed: i32,
    /// Number of octaves to sum.
    pub octaves: u32,
    /// Per-octave amplitude decay factor.
    pub persistence: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            offset: 0.0,
            scale: 1.0,
            spread: Vec3::splat(250.0),
            seed: 12345,
            octaves: 3,
            persistence: 0.6,
        }
    }
}

impl NoiseParams {
    /// Evaluate the configured noise at a single world-space point.
    ///
    /// `seed` is the caller's seed (a world or mapgen seed), added to the
    /// config's own. Agrees with
    /// [`perlin_map_2d`](super::NoiseMap::perlin_map_2d) sampled at the
    /// same world coordinate with the same instance seed.
    #[must_use]
    pub fn sample_2d(&self, x: f32, y: f32, seed: i32) -> f32 {
        self.offset
            + self.scale
                * perlin_2d(
                    x / self.spread.x,
                    y / self.spread.y,
                    seed.wrapping_add(self.seed),
                    self.octaves,
                    self.persistence,
                )
    }

    /// 3D counterpart of [`sample_2d`](Self::sample_2d).
    #[must_use]
    pub fn sample_3d(&self, x: f32, y: f32, z: f32, seed: i32) -> f32 {
        self.offset
            + self.scale
                * perlin_3d(
                    x / self.spread.x,
                    y / self.spread.y,
                    z / self.spread.z,
                    seed.wrapping_add(self.seed),
                    self.octaves,
                    self.persistence,
                )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::gradient_noise_2d;

    fn unit_params() -> NoiseParams {
        NoiseParams {
            offset: 0.0,
            scale: 1.0,
            spread: Vec3::ONE,
            seed: 0,
            octaves: 1,
            persistence: 0.5,
        }
    }

    #[test]
    fn test_defaults() {
        let params = NoiseParams::default();
        assert!((params.offset - 0.0).abs() < f32::EPSILON);
        assert!((params.scale - 1.0).abs() < f32::EPSILON);
        assert!((params.spread.x - 250.0).abs() < f32::EPSILON);
        assert_eq!(params.seed, 12345);
        assert_eq!(params.octaves, 3);
        assert!((params.persistence - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sample_2d_unit_config_is_plain_gradient() {
        let params = unit_params();
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(params.sample_2d(0.7, 0.3, 9), gradient_noise_2d(0.7, 0.3, 9));
        }
    }

    #[test]
    fn test_sample_applies_offset_and_scale() {
        let base = unit_params();
        let shaped = NoiseParams {
            offset: 5.0,
            scale: -2.0,
            ..base
        };
        let raw = base.sample_2d(1.3, -2.6, 42);
        let transformed = shaped.sample_2d(1.3, -2.6, 42);
        assert!((transformed - (5.0 - 2.0 * raw)).abs() < 1e-5);
    }

    #[test]
    fn test_sample_seed_composition() {
        // Caller seed and config seed combine additively.
        let a = NoiseParams {
            seed: 10,
            ..unit_params()
        };
        let b = NoiseParams {
            seed: 3,
            ..unit_params()
        };
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(a.sample_2d(0.4, 0.8, 5), b.sample_2d(0.4, 0.8, 12));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let params = NoiseParams {
            offset: 8.0,
            scale: 6.0,
            spread: Vec3::new(4.0, 4.0, 8.0),
            seed: 82341,
            octaves: 4,
            persistence: 0.6,
        };
        let json = serde_json::to_string(&params).expect("serialize NoiseParams");
        let back: NoiseParams = serde_json::from_str(&json).expect("deserialize NoiseParams");
        assert_eq!(back, params);
    }

    #[test]
    fn test_deserialize_from_config_json() {
        let json = r#"{
            "offset": 2.0,
            "scale": 3.0,
            "spread": [16.0, 16.0, 16.0],
            "seed": 7,
            "octaves": 2,
            "persistence": 0.5
        }"#;
        let params: NoiseParams = serde_json::from_str(json).expect("parse config");
        assert_eq!(params.octaves, 2);
        assert!((params.spread.y - 16.0).abs() < f32::EPSILON);
    }
}
