//! ASCII STL export of a polygon trajectory as a 3D-printable surface.
//!
//! Snapshot k becomes the cross-section at z = height·k/M, and consecutive
//! cross-sections are joined by a side wall of two triangles per vertex
//! index.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{ensure, Result};
use log::debug;
use potts_core::History;

#[derive(Debug, Copy, Clone)]
struct V3 {
    x: f64,
    y: f64,
    z: f64,
}

impl V3 {
    fn sub(&self, o: &V3) -> V3 {
        V3 {
            x: self.x - o.x,
            y: self.y - o.y,
            z: self.z - o.z,
        }
    }

    fn cross(&self, o: &V3) -> V3 {
        V3 {
            x: self.y * o.z - self.z * o.y,
            y: self.z * o.x - self.x * o.z,
            z: self.x * o.y - self.y * o.x,
        }
    }

    fn normalized(&self) -> V3 {
        let norm = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if norm == 0.0 {
            // Degenerate facet; a zero normal is tolerated by STL readers
            return *self;
        }
        V3 {
            x: self.x / norm,
            y: self.y / norm,
            z: self.z / norm,
        }
    }
}

/// Write the trajectory to `path` as an ASCII STL surface of the given total
/// height.
pub fn export_stl(history: &History, path: &Path, height: f64) -> Result<()> {
    let m = history.len();
    ensure!(m >= 2, "need at least 2 snapshots to build a mesh, got {}", m);

    let layers: Vec<Vec<V3>> = history
        .iter()
        .enumerate()
        .map(|(k, step)| {
            let z = height * k as f64 / m as f64;
            step.vertices.iter().map(|v| V3 { x: v.x, y: v.y, z }).collect()
        })
        .collect();
    let n = layers[0].len();

    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "solid potts")?;
    for i in 0..m - 1 {
        for j in 0..n {
            let jm = (j + n - 1) % n;
            facet(&mut w, &layers[i][j], &layers[i][jm], &layers[i + 1][jm])?;
            facet(&mut w, &layers[i][j], &layers[i + 1][jm], &layers[i + 1][j])?;
        }
    }
    writeln!(w, "endsolid potts")?;

    debug!("wrote {} facets to {}", (m - 1) * n * 2, path.display());
    Ok(())
}

fn facet<W: Write>(w: &mut W, a: &V3, b: &V3, c: &V3) -> Result<()> {
    let normal = b.sub(a).cross(&c.sub(a)).normalized();
    writeln!(w, "  facet normal {:e} {:e} {:e}", normal.x, normal.y, normal.z)?;
    writeln!(w, "    outer loop")?;
    for v in [a, b, c] {
        writeln!(w, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z)?;
    }
    writeln!(w, "    endloop")?;
    writeln!(w, "  endfacet")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use potts_core::{HistoryStep, R2};

    use super::*;

    fn triangle_step(offset: f64) -> HistoryStep {
        HistoryStep {
            hamiltonian: 0.0,
            vertices: vec![
                R2 { x: 0. + offset, y: 0. },
                R2 { x: 1. + offset, y: 0. },
                R2 { x: 0.5 + offset, y: 1. },
            ],
        }
    }

    #[test]
    fn test_export_stl_facet_count() {
        let history = History(vec![triangle_step(0.0), triangle_step(0.1)]);
        let path = std::env::temp_dir().join("potts-mesh-test.stl");
        export_stl(&history, &path, 2.0).unwrap();

        let stl = std::fs::read_to_string(&path).unwrap();
        assert!(stl.starts_with("solid potts"));
        assert!(stl.trim_end().ends_with("endsolid potts"));
        // Two triangles per vertex index per layer pair
        assert_eq!(stl.matches("facet normal").count(), 6);
        assert_eq!(stl.matches("endfacet").count(), 6);
    }

    #[test]
    fn test_export_stl_rejects_single_snapshot() {
        let history = History(vec![triangle_step(0.0)]);
        let path = std::env::temp_dir().join("potts-mesh-single.stl");
        assert!(export_stl(&history, &path, 2.0).is_err());
    }
}
