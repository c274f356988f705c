mod hamiltonian;

use rand::rngs::StdRng;
use rand::Rng;

use crate::geometry::polygon::Polygon;
use crate::geometry::r2::R2;

/// Random simple polygon: a regular n-gon with every vertex jiggled.
pub fn jiggled_polygon(rng: &mut StdRng, n: usize, amplitude: f64) -> Polygon {
    loop {
        let mut poly = Polygon::regular(n, 1.0);
        for v in &mut poly.vertices {
            v.x += rng.gen_range(-amplitude..=amplitude);
            v.y += rng.gen_range(-amplitude..=amplitude);
        }
        if poly.is_simple() {
            return poly;
        }
    }
}

/// Random perturbation of vertex `i`, re-drawn until the moved polygon stays
/// simple.
pub fn simple_perturbation(rng: &mut StdRng, poly: &Polygon, i: usize, radius: f64) -> R2 {
    loop {
        let v = poly.vertices[i];
        let candidate = R2 {
            x: v.x + rng.gen_range(-radius..=radius),
            y: v.y + rng.gen_range(-radius..=radius),
        };
        let mut moved = poly.clone();
        moved.vertices[i] = candidate;
        if moved.is_simple() {
            return candidate;
        }
    }
}
