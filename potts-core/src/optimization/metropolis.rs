//! Metropolis acceptance criterion.

use rand::Rng;

/// Accept or reject a proposed move with energy change `delta_h` at the
/// given temperature.
///
/// Energy decreases are accepted unconditionally; increases are accepted
/// with probability `exp(−ΔH/T)` against one uniform draw on [0, 1). An
/// infinite ΔH (self-intersecting candidate) is never accepted, since
/// `exp(−∞) = 0`.
pub fn accept_move<R: Rng>(delta_h: f64, temperature: f64, rng: &mut R) -> bool {
    if delta_h < 0.0 {
        return true;
    }
    rng.gen::<f64>() < (-delta_h / temperature).exp()
}
