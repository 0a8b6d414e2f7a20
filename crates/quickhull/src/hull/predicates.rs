//! Numerical predicates: side test and point-line distance.

use nalgebra::Vector2;

/// Signed area of the parallelogram spanned by `b - a` and `p - a`.
/// Positive when `p` lies left of the directed line a→b.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}

/// Strict side test: `p` strictly left of the directed line a→b.
///
/// Exactly-on-the-line (cross product zero) is not left; the partition
/// passes rely on this to drop on-line points from both sides.
#[inline]
pub fn strictly_left(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    cross(a, b, p) > 0.0
}

/// Implicit-form coefficients `(ca, cb, cc)` of the line through `a` and
/// `b`, with `ca*x + cb*y + cc = 0`.
#[inline]
pub(crate) fn line_coeffs(a: Vector2<f64>, b: Vector2<f64>) -> (f64, f64, f64) {
    (a.y - b.y, b.x - a.x, a.x * b.y - b.x * a.y)
}

/// Normalized distance from `p` to the line given by `line_coeffs`.
///
/// Only compared against other distances from the same line, so the
/// normalization is for symmetry with the textbook form, not a requirement.
#[inline]
pub(crate) fn dist_from_line(coeffs: (f64, f64, f64), p: Vector2<f64>) -> f64 {
    let (ca, cb, cc) = coeffs;
    (ca * p.x + cb * p.y + cc).abs() / (ca * ca + cb * cb).sqrt()
}
