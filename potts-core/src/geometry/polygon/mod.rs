mod angle;
mod simple;

pub use angle::interior_angle;

use std::f64::consts::PI;
use std::fmt::Display;

use derive_more::From;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::r2::R2;

#[derive(Debug, Clone, From, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<R2>,
}

impl Polygon {
    pub fn new(vertices: Vec<R2>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Polygon { vertices }
    }

    /// Regular n-gon inscribed in a circle of the given radius, centered at
    /// the origin, counterclockwise.
    pub fn regular(n: usize, radius: f64) -> Self {
        let vertices = (0..n)
            .map(|i| {
                let theta = 2.0 * PI * (i as f64) / (n as f64);
                R2 {
                    x: radius * theta.cos(),
                    y: radius * theta.sin(),
                }
            })
            .collect();
        Polygon::new(vertices)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Sum of edge lengths, cyclically, including the closing edge.
    pub fn perimeter(&self) -> f64 {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .map(|(a, b): (&R2, &R2)| a.distance(b))
            .sum()
    }

    /// Unsigned enclosed area (shoelace magnitude), independent of winding.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Shoelace area: positive for counterclockwise winding.
    pub fn signed_area(&self) -> f64 {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .map(|(a, b): (&R2, &R2)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verts: Vec<String> = self
            .vertices
            .iter()
            .map(|v| format!("({:.3}, {:.3})", v.x, v.y))
            .collect();
        write!(f, "Polygon[{}]", verts.join(", "))
    }
}

#[cfg(test)]
mod tests;
