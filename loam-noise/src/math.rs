//! Interpolation helpers shared by the noise generators.

/// Floor to an integer, rounding toward negative infinity.
///
/// `v as i32` truncates toward zero, which is wrong for negative
/// fractional values when picking the lattice cell a coordinate falls in.
#[inline]
#[must_use]
pub fn floor(v: f32) -> i32 {
    let i = v as i32;
    if v < i as f32 { i - 1 } else { i }
}

/// Linear interpolation: `a + alpha * (b - a)`.
#[inline]
#[must_use]
pub fn lerp(alpha: f32, a: f32, b: f32) -> f32 {
    a + alpha * (b - a)
}

/// Bilinear interpolation between 4 values in a 2D grid.
#[inline]
#[must_use]
pub fn lerp2(a1: f32, a2: f32, x00: f32, x10: f32, x01: f32, x11: f32) -> f32 {
    lerp(a2, lerp(a1, x00, x10), lerp(a1, x01, x11))
}

/// Trilinear interpolation between 8 values in a 3D grid.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    a1: f32,
    a2: f32,
    a3: f32,
    x000: f32,
    x100: f32,
    x010: f32,
    x110: f32,
    x001: f32,
    x101: f32,
    x011: f32,
    x111: f32,
) -> f32 {
    lerp(
        a3,
        lerp2(a1, a2, x000, x100, x010, x110),
        lerp2(a1, a2, x001, x101, x011, x111),
    )
}

/// Quintic easing curve `6t^5 - 15t^4 + 10t^3`.
///
/// Maps 0 to 0 and 1 to 1 with zero first and second derivative at both
/// ends. Interpolating lattice noise with this weight instead of a linear
/// one leaves no visible seams or derivative breaks at lattice boundaries.
#[inline]
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
