//! Recorded polygon trajectory: one snapshot per sweep, JSON-persistable.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::geometry::r2::R2;

/// One recorded snapshot: the polygon's vertices after a sweep, plus its
/// Hamiltonian at that point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStep {
    pub hamiltonian: f64,
    pub vertices: Vec<R2>,
}

#[derive(Debug, Clone, Default, PartialEq, derive_more::Deref, Serialize, Deserialize)]
pub struct History(pub Vec<HistoryStep>);

impl History {
    pub fn push(&mut self, step: HistoryStep) {
        self.0.push(step);
    }

    /// Serialize the trajectory to a JSON file, creating parent directories
    /// as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a trajectory previously written by [`History::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<History> {
        let file = File::open(path)?;
        let history = serde_json::from_reader(BufReader::new(file))?;
        Ok(history)
    }
}
