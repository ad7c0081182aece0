//! Scalar helpers shared by the noise samplers.

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`, which keeps
/// the interpolated field C² continuous across lattice cell boundaries.
#[inline]
#[must_use]
pub const fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `a` to `b` by `t`.
///
/// Evaluated as `a + t * (b - a)`. The operation order is part of the output
/// and must not be rewritten as a fused multiply-add.
#[inline]
#[must_use]
pub const fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Lattice index of the cell containing `value`, masked to `0..=255`.
///
/// Floors first and then masks the two's-complement integer, so `-0.5`
/// lands in cell 255 rather than cell 0.
#[inline]
#[must_use]
pub fn lattice_floor(value: f64) -> usize {
    (value.floor() as i64 & 0xFF) as usize
}
