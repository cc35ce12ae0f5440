//! Bulk noise materialization over 2D and 3D grids.
//!
//! A [`NoiseMap`] owns three fixed-size buffers: per-octave scratch,
//! octave accumulation, and the transformed result. Map calls overwrite
//! them in place; construction is the only allocation point. World
//! generation fills maps once per chunk column, so the hot path must not
//! touch the heap.

use super::gradient::{gradient_noise_2d, gradient_noise_3d};
use super::params::NoiseParams;

/// Materializes multi-octave noise over a fixed-size 2D or 3D grid.
///
/// Borrows its [`NoiseParams`] for its whole lifetime; the instance `seed`
/// is combined additively with the config seed and the octave index, so
/// several materializers can share one config while producing unrelated
/// fields.
///
/// The map operations take `&mut self` and return a view into the result
/// buffer that is valid until the next map call, which the borrow checker
/// enforces. A single instance cannot be used from two threads at once;
/// generators keep one instance per worker thread.
#[derive(Debug)]
pub struct NoiseMap<'a> {
    params: &'a NoiseParams,
    seed: i32,
    sx: usize,
    sy: usize,
    sz: usize,
    /// One octave of raw gradient samples.
    scratch: Box<[f32]>,
    /// Weighted octave sum, before the affine transform.
    accumulated: Box<[f32]>,
    /// `offset + scale * accumulated`, handed out to callers.
    result: Box<[f32]>,
}

impl<'a> NoiseMap<'a> {
    /// Create a 2D materializer of `sx * sy` cells.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new_2d(params: &'a NoiseParams, seed: i32, sx: usize, sy: usize) -> Self {
        Self::new(params, seed, sx, sy, 1)
    }

    /// Create a 3D materializer of `sx * sy * sz` cells.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    #[must_use]
    pub fn new_3d(params: &'a NoiseParams, seed: i32, sx: usize, sy: usize, sz: usize) -> Self {
        Self::new(params, seed, sx, sy, sz)
    }

    fn new(params: &'a NoiseParams, seed: i32, sx: usize, sy: usize, sz: usize) -> Self {
        assert!(
            sx > 0 && sy > 0 && sz > 0,
            "noise map dimensions must be positive, got {sx}x{sy}x{sz}"
        );
        let len = sx * sy * sz;
        tracing::debug!(sx, sy, sz, seed, "allocating noise map buffers");
        Self {
            params,
            seed,
            sx,
            sy,
            sz,
            scratch: vec![0.0; len].into_boxed_slice(),
            accumulated: vec![0.0; len].into_boxed_slice(),
            result: vec![0.0; len].into_boxed_slice(),
        }
    }

    /// Grid dimensions as `(sx, sy, sz)`; `sz` is 1 for 2D instances.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    /// The most recently materialized map, row-major with x varying
    /// fastest.
    ///
    /// Overwritten by the next map call on this instance.
    #[must_use]
    pub fn result(&self) -> &[f32] {
        &self.result
    }

    /// Fill the scratch buffer with one octave of raw gradient samples,
    /// anchored at `(x, y)` in lattice coordinates with per-cell steps.
    fn gradient_map_2d(&mut self, x: f32, y: f32, step_x: f32, step_y: f32, seed: i32) {
        let mut index = 0;
        for j in 0..self.sy {
            let cell_y = y + step_y * j as f32;
            for i in 0..self.sx {
                let cell_x = x + step_x * i as f32;
                self.scratch[index] = gradient_noise_2d(cell_x, cell_y, seed);
                index += 1;
            }
        }
    }

    /// 3D counterpart of [`gradient_map_2d`](Self::gradient_map_2d).
    #[allow(clippy::too_many_arguments)]
    fn gradient_map_3d(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        step_x: f32,
        step_y: f32,
        step_z: f32,
        seed: i32,
    ) {
        let mut index = 0;
        for k in 0..self.sz {
            let cell_z = z + step_z * k as f32;
            for j in 0..self.sy {
                let cell_y = y + step_y * j as f32;
                for i in 0..self.sx {
                    let cell_x = x + step_x * i as f32;
                    self.scratch[index] = gradient_noise_3d(cell_x, cell_y, cell_z, seed);
                    index += 1;
                }
            }
        }
    }

    /// Materialize the configured 2D noise anchored at world coordinates
    /// `(x, y)`, one cell per world unit.
    ///
    /// Returns a view into the result buffer, valid until the next map
    /// call on this instance.
    ///
    /// # Panics
    ///
    /// Panics when called on an instance constructed with
    /// [`new_3d`](Self::new_3d): the fill would leave stale cells in the
    /// returned view.
    pub fn perlin_map_2d(&mut self, x: f32, y: f32) -> &[f32] {
        assert!(
            self.sz == 1,
            "2D map fill on a {}x{}x{} instance",
            self.sx,
            self.sy,
            self.sz
        );
        let spread = self.params.spread;
        let octaves = self.params.octaves;
        let persistence = self.params.persistence;
        let x = x / spread.x;
        let y = y / spread.y;

        self.accumulated.fill(0.0);
        let mut frequency = 1.0_f32;
        let mut amplitude = 1.0_f32;
        for i in 0..octaves {
            let octave_seed = self
                .seed
                .wrapping_add(self.params.seed)
                .wrapping_add(i as i32);
            self.gradient_map_2d(
                x * frequency,
                y * frequency,
                frequency / spread.x,
                frequency / spread.y,
                octave_seed,
            );
            for (cell, &sample) in self.accumulated.iter_mut().zip(self.scratch.iter()) {
                *cell += amplitude * sample;
            }
            frequency *= 2.0;
            amplitude *= persistence;
        }

        self.apply_transform();
        &self.result
    }

    /// Materialize the configured 3D noise anchored at world coordinates
    /// `(x, y, z)`, one cell per world unit.
    ///
    /// Returns a view into the result buffer, valid until the next map
    /// call on this instance.
    ///
    /// # Panics
    ///
    /// Panics when called on an instance constructed with
    /// [`new_2d`](Self::new_2d).
    pub fn perlin_map_3d(&mut self, x: f32, y: f32, z: f32) -> &[f32] {
        assert!(
            self.sz > 1,
            "3D map fill on a {}x{}x{} instance",
            self.sx,
            self.sy,
            self.sz
        );
        let spread = self.params.spread;
        let octaves = self.params.octaves;
        let persistence = self.params.persistence;
        let x = x / spread.x;
        let y = y / spread.y;
        let z = z / spread.z;

        self.accumulated.fill(0.0);
        let mut frequency = 1.0_f32;
        let mut amplitude = 1.0_f32;
        for i in 0..octaves {
            let octave_seed = self
                .seed
                .wrapping_add(self.params.seed)
                .wrapping_add(i as i32);
            self.gradient_map_3d(
                x * frequency,
                y * frequency,
                z * frequency,
                frequency / spread.x,
                frequency / spread.y,
                frequency / spread.z,
                octave_seed,
            );
            for (cell, &sample) in self.accumulated.iter_mut().zip(self.scratch.iter()) {
                *cell += amplitude * sample;
            }
            frequency *= 2.0;
            amplitude *= persistence;
        }

        self.apply_transform();
        &self.result
    }

    /// Elementwise affine transform of the accumulated octave sum into the
    /// result buffer: `result = offset + scale * accumulated`.
    fn apply_transform(&mut self) {
        let offset = self.params.offset;
        let scale = self.params.scale;
        for (out, &cell) in self.result.iter_mut().zip(self.accumulated.iter()) {
            *out = offset + scale * cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::gradient_noise_2d;
    use glam::Vec3;

    fn test_params(octaves: u32) -> NoiseParams {
        NoiseParams {
            offset: 0.0,
            scale: 1.0,
            spread: Vec3::ONE,
            seed: 0,
            octaves,
            persistence: 0.5,
        }
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_width_panics() {
        let params = test_params(1);
        let _ = NoiseMap::new_2d(&params, 0, 0, 4);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_depth_panics() {
        let params = test_params(1);
        let _ = NoiseMap::new_3d(&params, 0, 4, 4, 0);
    }

    #[test]
    #[should_panic(expected = "2D map fill")]
    fn test_2d_fill_on_3d_instance_panics() {
        let params = test_params(1);
        let mut map = NoiseMap::new_3d(&params, 0, 4, 4, 4);
        let _ = map.perlin_map_2d(0.0, 0.0);
    }

    #[test]
    fn test_repeated_fill_is_identical() {
        // 4x4 map, seed 1234, 3 octaves, persistence 0.5, spread 1: the
        // same origin must yield the same 16 values every time.
        let params = test_params(3);
        let mut map = NoiseMap::new_2d(&params, 1234, 4, 4);
        let first = map.perlin_map_2d(0.0, 0.0).to_vec();
        let second = map.perlin_map_2d(0.0, 0.0).to_vec();
        assert_eq!(first.len(), 16);
        assert_eq!(first, second);

        // A fresh instance with the same inputs agrees too.
        let mut other = NoiseMap::new_2d(&params, 1234, 4, 4);
        let third = other.perlin_map_2d(0.0, 0.0).to_vec();
        assert_eq!(first, third);
    }

    #[test]
    fn test_result_accessor_matches_returned_view() {
        let params = test_params(2);
        let mut map = NoiseMap::new_2d(&params, 5, 8, 8);
        let filled = map.perlin_map_2d(16.0, -4.0).to_vec();
        assert_eq!(map.result(), filled.as_slice());
    }

    #[test]
    fn test_single_octave_matches_direct_evaluation() {
        let params = NoiseParams {
            offset: 2.0,
            scale: 3.0,
            spread: Vec3::splat(4.0),
            seed: 11,
            octaves: 1,
            persistence: 0.5,
        };
        let mut map = NoiseMap::new_2d(&params, 7, 8, 6);
        let (origin_x, origin_y) = (32.0_f32, -16.0_f32);
        let out = map.perlin_map_2d(origin_x, origin_y).to_vec();
        for j in 0..6 {
            for i in 0..8 {
                let world_x = origin_x + i as f32;
                let world_y = origin_y + j as f32;
                let expected =
                    2.0 + 3.0 * gradient_noise_2d(world_x / 4.0, world_y / 4.0, 7 + 11);
                let got = out[j * 8 + i];
                assert!(
                    (got - expected).abs() < 1e-5,
                    "cell ({i},{j}): {got} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_affine_transform_purity() {
        // Identical accumulation, different offset/scale: every result
        // cell must be exactly offset + scale * raw.
        let raw_params = test_params(3);
        let shaped_params = NoiseParams {
            offset: 8.0,
            scale: -6.0,
            ..raw_params
        };
        let mut raw_map = NoiseMap::new_2d(&raw_params, 1234, 8, 8);
        let mut shaped_map = NoiseMap::new_2d(&shaped_params, 1234, 8, 8);
        let raw = raw_map.perlin_map_2d(3.0, 9.0).to_vec();
        let shaped = shaped_map.perlin_map_2d(3.0, 9.0).to_vec();
        for (cell, (&r, &s)) in raw.iter().zip(shaped.iter()).enumerate() {
            assert!(
                (s - (8.0 - 6.0 * r)).abs() < 1e-5,
                "cell {cell}: {s} vs offset+scale*{r}"
            );
        }
    }

    #[test]
    fn test_3d_map_deterministic() {
        let params = NoiseParams {
            spread: Vec3::splat(8.0),
            ..test_params(2)
        };
        let mut map = NoiseMap::new_3d(&params, 99, 4, 4, 4);
        let first = map.perlin_map_3d(0.0, 8.0, -8.0).to_vec();
        let second = map.perlin_map_3d(0.0, 8.0, -8.0).to_vec();
        assert_eq!(first.len(), 64);
        assert_eq!(first, second);
    }

    #[test]
    fn test_instance_seed_changes_field() {
        let params = test_params(2);
        let mut a = NoiseMap::new_2d(&params, 1, 16, 16);
        let mut b = NoiseMap::new_2d(&params, 2, 16, 16);
        let map_a = a.perlin_map_2d(0.0, 0.0).to_vec();
        let map_b = b.perlin_map_2d(0.0, 0.0).to_vec();
        let changed = map_a
            .iter()
            .zip(map_b.iter())
            .filter(|(x, y)| (*x - *y).abs() > f32::EPSILON)
            .count();
        assert!(
            changed * 10 >= map_a.len() * 9,
            "only {changed}/{} cells changed with the seed",
            map_a.len()
        );
    }

    #[test]
    fn test_dimensions_accessor() {
        let params = test_params(1);
        let map = NoiseMap::new_3d(&params, 0, 2, 3, 4);
        assert_eq!(map.dimensions(), (2, 3, 4));
    }
}
