use rand::Rng;

use crate::error::{GeometryError, Result};
use crate::math::Vector;

/// Uniform sample from `[lo, hi]` for `lo <= hi`.
///
/// Blends the endpoints instead of sampling `lo + (hi - lo) * t`, so bounds
/// whose difference overflows `f32` (a rect spanning most of the float range)
/// still produce a finite point.
pub fn random_range(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    let t: f32 = rng.gen_range(0.0..=1.0);
    (lo * (1.0 - t) + hi * t).max(lo).min(hi)
}

#[inline]
pub fn distance(a: impl Into<Vector>, b: impl Into<Vector>) -> f32 {
    a.into().distance(b.into())
}

/// Cheaper than [`distance`] and orders points the same way.
#[inline]
pub fn distance_squared(a: impl Into<Vector>, b: impl Into<Vector>) -> f32 {
    a.into().distance_squared(b.into())
}

/// `num_points` evenly spaced vectors from `a` to `b`, both endpoints included.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewPoints`] if `num_points < 2`.
pub fn interpolate(a: Vector, b: Vector, num_points: usize) -> Result<Vec<Vector>> {
    if num_points < 2 {
        return Err(GeometryError::TooFewPoints {
            requested: num_points,
        });
    }

    let steps = num_points - 1;
    let points = (0..num_points)
        .map(|i| match i {
            0 => a,
            i if i == steps => b,
            i => a.lerp(b, i as f32 / steps as f32),
        })
        .collect();
    Ok(points)
}
