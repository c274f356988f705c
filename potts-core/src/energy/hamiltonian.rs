//! Weighted combination of the four energy terms versus their targets.

use serde::{Deserialize, Serialize};

use crate::energy::angle::{angle_cost, delta_angle_cost};
use crate::energy::area::{area, delta_area};
use crate::energy::length::{delta_length_cost, length_cost};
use crate::energy::perimeter::{delta_perimeter, perimeter};
use crate::geometry::polygon::Polygon;
use crate::geometry::r2::R2;

/// Per-term weights, frozen for the duration of a run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Weights {
    pub area: f64,
    pub perimeter: f64,
    pub angle: f64,
    pub length: f64,
}

/// Per-term targets, frozen for the duration of a run.
///
/// The angle term has no target field: perfectly smooth (0) is its implicit
/// target.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Targets {
    pub area: f64,
    pub perimeter: f64,
    pub length: f64,
}

/// Cached values of the four energy terms for the current polygon.
///
/// Invariant: between accepted moves this equals [`EnergyState::measure`]
/// over the current polygon, within floating-point tolerance. The annealer
/// maintains it incrementally from the term deltas rather than recomputing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyState {
    pub perimeter: f64,
    pub area: f64,
    pub angle_cost: f64,
    pub length_cost: f64,
}

impl EnergyState {
    /// Full from-scratch measurement of all four terms.
    pub fn measure(poly: &Polygon, length_target: f64) -> Self {
        EnergyState {
            perimeter: perimeter(poly),
            area: area(poly),
            angle_cost: angle_cost(poly),
            length_cost: length_cost(poly, length_target),
        }
    }

    /// Weighted energy of these term values (no simplicity check).
    pub fn energy(&self, weights: &Weights, targets: &Targets) -> f64 {
        weights.area * (self.area - targets.area).powi(2)
            + weights.angle * self.angle_cost
            + weights.perimeter * (self.perimeter - targets.perimeter).powi(2)
            + weights.length * self.length_cost
    }
}

/// Full Hamiltonian of the polygon: +∞ if it is not simple, otherwise the
/// weighted sum of the four terms versus their targets.
pub fn hamiltonian(poly: &Polygon, weights: &Weights, targets: &Targets) -> f64 {
    if !poly.is_simple() {
        return f64::INFINITY;
    }
    EnergyState::measure(poly, targets.length).energy(weights, targets)
}

/// Change in the Hamiltonian from moving vertex `i` to `new_point`, plus the
/// term values the cached state should take if the move is committed.
///
/// For the quadratic terms (area, perimeter) the change in
/// `weight·(value−target)²` is expanded in closed form as
/// `weight·(2·value·Δ + Δ² − 2·Δ·target)`; the angle and length costs enter
/// the energy linearly, so their contribution is just `weight·Δ`. Nothing
/// O(N) is recomputed.
///
/// If the candidate polygon is not simple, or the move would flip its
/// winding (the incremental area bookkeeping assumes a fixed orientation),
/// returns `(+∞, *state)` with the term values unchanged; the caller must
/// not commit that state.
pub fn delta_hamiltonian(
    poly: &Polygon,
    i: usize,
    new_point: &R2,
    state: &EnergyState,
    weights: &Weights,
    targets: &Targets,
) -> (f64, EnergyState) {
    let mut candidate = poly.clone();
    candidate.vertices[i] = *new_point;
    if !candidate.is_simple() || candidate.signed_area() * poly.signed_area() <= 0.0 {
        return (f64::INFINITY, *state);
    }

    let d_perimeter = delta_perimeter(poly, i, new_point);
    let d_area = delta_area(poly, i, new_point);
    let d_angle = delta_angle_cost(poly, i, new_point);
    let d_length = delta_length_cost(poly, i, new_point, targets.length);

    let next = EnergyState {
        perimeter: state.perimeter + d_perimeter,
        area: state.area + d_area,
        angle_cost: state.angle_cost + d_angle,
        length_cost: state.length_cost + d_length,
    };

    let delta = term_delta(state.area, d_area, targets.area, weights.area)
        + weights.angle * d_angle
        + term_delta(state.perimeter, d_perimeter, targets.perimeter, weights.perimeter)
        + weights.length * d_length;

    (delta, next)
}

/// Exact expansion of `weight·((value+Δ−target)² − (value−target)²)`.
fn term_delta(value: f64, delta: f64, target: f64, weight: f64) -> f64 {
    weight * (2.0 * value * delta + delta * delta - 2.0 * delta * target)
}
