use crate::geometry::polygon::Polygon;
use crate::geometry::r2::R2;

/// Unsigned enclosed area of the polygon.
pub fn area(poly: &Polygon) -> f64 {
    poly.area()
}

/// Change in enclosed area from moving vertex `i` to `new_point`.
///
/// The area decomposes additively along the fixed chord (i−1 → i+1), so only
/// the triangle over that chord changes. Signed triangle areas make the
/// delta exact for any simple counterclockwise polygon, including reflex
/// vertices, as long as the move preserves the winding; moves that would
/// flip it are rejected upstream by
/// [`delta_hamiltonian`](crate::energy::hamiltonian::delta_hamiltonian).
pub fn delta_area(poly: &Polygon, i: usize, new_point: &R2) -> f64 {
    let n = poly.num_vertices();
    let prev = &poly.vertices[(i + n - 1) % n];
    let next = &poly.vertices[(i + 1) % n];
    signed_triangle_area(prev, new_point, next) - signed_triangle_area(prev, &poly.vertices[i], next)
}

/// Signed area of the triangle (a, b, c): positive when counterclockwise.
fn signed_triangle_area(a: &R2, b: &R2, c: &R2) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)) / 2.0
}
