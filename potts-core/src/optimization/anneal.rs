//! Annealing engine: drives sweeps of single-vertex Metropolis moves over a
//! polygon, maintaining the cached energy-term values incrementally.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::energy::hamiltonian::{delta_hamiltonian, EnergyState, Targets, Weights};
use crate::error::ConfigError;
use crate::geometry::polygon::Polygon;
use crate::geometry::r2::R2;
use crate::optimization::history::{History, HistoryStep};
use crate::optimization::metropolis::accept_move;

/// Run configuration.
///
/// The `*_target` fields are multipliers applied to the initial polygon's
/// own measured values: `area_target · initial_area`,
/// `perimeter_target · initial_perimeter`, and
/// `length_target · initial_mean_edge_length`. The resulting absolute
/// targets are frozen for the run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Number of polygon vertices (≥ 3)
    pub n_vertices: usize,
    /// Number of sweeps; each sweep proposes one move per vertex
    pub sweeps: usize,
    /// Per-coordinate uniform perturbation radius for proposed moves
    pub jiggle_radius: f64,
    /// Metropolis temperature, constant for the whole run
    pub temperature: f64,
    pub area_target: f64,
    pub area_weight: f64,
    pub perimeter_target: f64,
    pub perimeter_weight: f64,
    pub angle_weight: f64,
    pub length_target: f64,
    pub length_weight: f64,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        AnnealConfig {
            n_vertices: 100,
            sweeps: 400,
            jiggle_radius: 0.02,
            temperature: 0.05,
            area_target: 1.0,
            area_weight: 0.6,
            perimeter_target: 2.0,
            perimeter_weight: 0.0,
            angle_weight: 2000.0,
            length_target: 6.0,
            length_weight: 10.0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_vertices < 3 {
            return Err(ConfigError::TooFewVertices(self.n_vertices));
        }
        if self.sweeps == 0 {
            return Err(ConfigError::ZeroSweeps);
        }
        if self.temperature <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature(self.temperature));
        }
        if self.jiggle_radius <= 0.0 {
            return Err(ConfigError::NonPositiveJiggleRadius(self.jiggle_radius));
        }
        Ok(())
    }
}

/// The one stateful control loop of the optimizer. Owns the polygon and its
/// cached [`EnergyState`] exclusively for the duration of a run; all energy
/// math it calls into is pure.
pub struct Annealer {
    config: AnnealConfig,
    polygon: Polygon,
    state: EnergyState,
    weights: Weights,
    targets: Targets,
    rng: StdRng,
    history: History,
}

impl Annealer {
    /// Validate the configuration, build the initial regular n-gon inscribed
    /// in the unit circle, measure its energy terms, and derive the absolute
    /// targets from them.
    pub fn new(config: AnnealConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let polygon = Polygon::regular(config.n_vertices, 1.0);
        let initial_perimeter = polygon.perimeter();
        let length_target = config.length_target * initial_perimeter / config.n_vertices as f64;
        let state = EnergyState::measure(&polygon, length_target);
        let targets = Targets {
            area: config.area_target * state.area,
            perimeter: config.perimeter_target * state.perimeter,
            length: length_target,
        };
        let weights = Weights {
            area: config.area_weight,
            perimeter: config.perimeter_weight,
            angle: config.angle_weight,
            length: config.length_weight,
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            "annealer: n = {}, targets: area {:.4}, perimeter {:.4}, length {:.4}",
            config.n_vertices, targets.area, targets.perimeter, targets.length,
        );

        let mut annealer = Annealer {
            config,
            polygon,
            state,
            weights,
            targets,
            rng,
            history: History::default(),
        };
        annealer.record();
        Ok(annealer)
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn state(&self) -> &EnergyState {
        &self.state
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Weighted energy of the current cached state. The polygon is simple at
    /// every point between moves, so this is finite.
    pub fn energy(&self) -> f64 {
        self.state.energy(&self.weights, &self.targets)
    }

    /// One sweep: exactly one proposed move per vertex, in freshly shuffled
    /// order. Returns the number of accepted moves.
    ///
    /// Moves are resolved strictly sequentially: each proposal is scored
    /// against the cached state left by whatever earlier moves in the same
    /// sweep were committed.
    pub fn sweep(&mut self) -> usize {
        let n = self.polygon.num_vertices();
        let r = self.config.jiggle_radius;
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);

        let mut accepted = 0;
        for i in order {
            let v = self.polygon.vertices[i];
            let candidate = R2 {
                x: v.x + self.rng.gen_range(-r..=r),
                y: v.y + self.rng.gen_range(-r..=r),
            };
            let (delta_h, next_state) = delta_hamiltonian(
                &self.polygon,
                i,
                &candidate,
                &self.state,
                &self.weights,
                &self.targets,
            );
            if accept_move(delta_h, self.config.temperature, &mut self.rng) {
                // Commit the vertex and the cached state together
                self.polygon.vertices[i] = candidate;
                self.state = next_state;
                accepted += 1;
            }
        }
        accepted
    }

    /// Run the configured number of sweeps, recording a snapshot after each.
    /// The returned history holds the initial polygon plus one entry per
    /// sweep.
    pub fn run(&mut self) -> &History {
        for sweep_idx in 0..self.config.sweeps {
            let accepted = self.sweep();
            self.record();
            debug!(
                "sweep {}: {}/{} moves accepted, H = {:.6}",
                sweep_idx,
                accepted,
                self.polygon.num_vertices(),
                self.energy(),
            );
        }
        &self.history
    }

    fn record(&mut self) {
        self.history.push(HistoryStep {
            hamiltonian: self.energy(),
            vertices: self.polygon.vertices.clone(),
        });
    }
}
