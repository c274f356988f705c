use crate::geometry::r2::R2;

/// Interior angle at `p` between the rays toward `prev` and `next`, in [0, π].
///
/// The cosine argument is clamped to [−1, 1] before inversion: floating-point
/// overshoot on nearly parallel or anti-parallel rays would otherwise push it
/// out of acos's domain.
pub fn interior_angle(prev: &R2, p: &R2, next: &R2) -> f64 {
    let v1 = *prev - *p;
    let v2 = *next - *p;
    let dot = v1.x * v2.x + v1.y * v2.y;
    let cos = dot / (v1.norm() * v2.norm());
    cos.clamp(-1.0, 1.0).acos()
}
