use itertools::Itertools;

use crate::geometry::polygon::Polygon;
use crate::geometry::r2::R2;

/// Edge-length uniformity: mean over edges of (length − target)².
pub fn length_cost(poly: &Polygon, target_length: f64) -> f64 {
    let n = poly.num_vertices();
    poly.vertices
        .iter()
        .circular_tuple_windows()
        .map(|(a, b): (&R2, &R2)| {
            let d = a.distance(b) - target_length;
            d * d
        })
        .sum::<f64>()
        / n as f64
}

/// Change in [`length_cost`] from moving vertex `i` to `new_point`.
///
/// Only the edges (i−1, i) and (i, i+1) change; the summed change in their
/// squared deviations is divided by N to match the mean-normalized full
/// metric.
pub fn delta_length_cost(poly: &Polygon, i: usize, new_point: &R2, target_length: f64) -> f64 {
    let n = poly.num_vertices();
    let prev = &poly.vertices[(i + n - 1) % n];
    let next = &poly.vertices[(i + 1) % n];

    let old_sum = squared_deviation(prev.distance(&poly.vertices[i]), target_length)
        + squared_deviation(poly.vertices[i].distance(next), target_length);
    let new_sum = squared_deviation(prev.distance(new_point), target_length)
        + squared_deviation(new_point.distance(next), target_length);

    (new_sum - old_sum) / n as f64
}

fn squared_deviation(length: f64, target: f64) -> f64 {
    let d = length - target;
    d * d
}
