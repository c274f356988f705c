use crate::geometry::polygon::Polygon;
use crate::geometry::r2::R2;

/// Total edge length of the polygon, closing edge included.
pub fn perimeter(poly: &Polygon) -> f64 {
    poly.perimeter()
}

/// Change in perimeter from moving vertex `i` to `new_point`.
///
/// Only the edges (i−1, i) and (i, i+1) change.
pub fn delta_perimeter(poly: &Polygon, i: usize, new_point: &R2) -> f64 {
    let n = poly.num_vertices();
    let prev = &poly.vertices[(i + n - 1) % n];
    let next = &poly.vertices[(i + 1) % n];
    let old_length = prev.distance(&poly.vertices[i]) + poly.vertices[i].distance(next);
    let new_length = prev.distance(new_point) + new_point.distance(next);
    new_length - old_length
}
