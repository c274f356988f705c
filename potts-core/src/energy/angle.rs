use std::f64::consts::PI;

use crate::geometry::polygon::{interior_angle, Polygon};
use crate::geometry::r2::R2;

/// Angular smoothness: mean over vertices of ((θ/π) − 1)².
///
/// Zero for a polygon whose every interior angle is a straight line; large
/// when the boundary has sharp kinks. There is no separate target for this
/// term, perfectly smooth (0) is the implicit goal.
pub fn angle_cost(poly: &Polygon) -> f64 {
    let n = poly.num_vertices();
    let v = &poly.vertices;
    (0..n)
        .map(|i| {
            let theta = interior_angle(&v[(i + n - 2) % n], &v[(i + n - 1) % n], &v[i]);
            squared_deviation(theta)
        })
        .sum::<f64>()
        / n as f64
}

/// Change in [`angle_cost`] from moving vertex `i` to `new_point`.
///
/// Moving vertex i changes the interior angles at i−1, i, and i+1: exactly
/// the three triples that contain vertex i. The summed change is normalized
/// by N so the delta stays consistent with the N-division of the full
/// metric and the cached term value matches a from-scratch recomputation.
pub fn delta_angle_cost(poly: &Polygon, i: usize, new_point: &R2) -> f64 {
    let n = poly.num_vertices();
    let v = &poly.vertices;
    let pm2 = &v[(i + n - 2) % n];
    let pm1 = &v[(i + n - 1) % n];
    let pp1 = &v[(i + 1) % n];
    let pp2 = &v[(i + 2) % n];

    let old_sum = squared_deviation(interior_angle(pm2, pm1, &v[i]))
        + squared_deviation(interior_angle(pm1, &v[i], pp1))
        + squared_deviation(interior_angle(&v[i], pp1, pp2));
    let new_sum = squared_deviation(interior_angle(pm2, pm1, new_point))
        + squared_deviation(interior_angle(pm1, new_point, pp1))
        + squared_deviation(interior_angle(new_point, pp1, pp2));

    (new_sum - old_sum) / n as f64
}

fn squared_deviation(theta: f64) -> f64 {
    let d = theta / PI - 1.0;
    d * d
}
