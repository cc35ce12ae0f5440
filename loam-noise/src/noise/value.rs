//! Integer-lattice value noise.
//!
//! A pure hash from `(x, y[, z], seed)` to a scalar in `[-1, 1]`. Nothing
//! here interpolates; `gradient` turns these lattice samples into
//! continuous fields.

/// Per-axis lattice mixing constants. Chosen as primes far apart so nearby
/// lattice points land in distant hash buckets.
const LATTICE_X: i32 = 1619;
const LATTICE_Y: i32 = 31337;
const LATTICE_Z: i32 = 52591;
const LATTICE_SEED: i32 = 1013;

/// Mix a combined lattice index down to a scalar in `(-1, 1]`.
///
/// All arithmetic is explicit `i32` wrapping so the result is identical on
/// every platform.
fn mix(n: i32) -> f32 {
    let mut n = n & 0x7fff_ffff;
    n = (n >> 13) ^ n;
    n = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - n as f32 / 1_073_741_824.0
}

/// Hash a 2D integer lattice point to a scalar in `[-1, 1]`.
///
/// Pure function of its inputs: the same `(x, y, seed)` produces the same
/// value in every process run.
#[must_use]
pub fn noise_2d(x: i32, y: i32, seed: i32) -> f32 {
    mix(x
        .wrapping_mul(LATTICE_X)
        .wrapping_add(y.wrapping_mul(LATTICE_Y))
        .wrapping_add(seed.wrapping_mul(LATTICE_SEED)))
}

/// Hash a 3D integer lattice point to a scalar in `[-1, 1]`.
#[must_use]
pub fn noise_3d(x: i32, y: i32, z: i32, seed: i32) -> f32 {
    mix(x
        .wrapping_mul(LATTICE_X)
        .wrapping_add(y.wrapping_mul(LATTICE_Y))
        .wrapping_add(z.wrapping_mul(LATTICE_Z))
        .wrapping_add(seed.wrapping_mul(LATTICE_SEED)))
}
