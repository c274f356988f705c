//! Energy terms over the polygon vertex sequence.
//!
//! Each term exposes a full evaluator over all N vertices and a delta
//! evaluator giving the exact change when a single vertex moves. The deltas
//! only touch a bounded neighborhood of the moved vertex, so a proposed move
//! is scored in O(1) once the current term values are cached (see
//! [`hamiltonian::EnergyState`]).

pub mod angle;
pub mod area;
pub mod hamiltonian;
pub mod length;
pub mod perimeter;

#[cfg(test)]
mod tests;
