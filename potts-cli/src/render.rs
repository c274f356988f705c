//! SVG rendering of recorded polygon snapshots, one frame per file.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;
use log::debug;
use potts_core::{History, HistoryStep};

/// SVG rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas size in pixels (frames are square)
    pub size: f64,
    /// Half-width of the world-coordinate viewport, centered on the origin
    pub extent: f64,
    /// Stroke width in world coordinates
    pub stroke_width: f64,
    /// Fill opacity (0.0 - 1.0)
    pub fill_opacity: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 800.0,
            // The polygon starts inscribed in the unit circle; 1.5 leaves
            // room for outward growth
            extent: 1.5,
            stroke_width: 0.01,
            fill_opacity: 0.3,
        }
    }
}

const COLOR: &str = "#377eb8"; // blue

/// Render one snapshot to an SVG string.
pub fn render_svg(step: &HistoryStep, config: &RenderConfig) -> String {
    let e = config.extent;
    let mut svg = String::new();

    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        config.size,
        config.size,
        -e,
        -e,
        2.0 * e,
        2.0 * e
    )
    .unwrap();
    writeln!(
        &mut svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
        -e,
        -e,
        2.0 * e,
        2.0 * e
    )
    .unwrap();

    // Flip the y axis so the world's +y points up on screen
    writeln!(&mut svg, r#"  <g transform="scale(1, -1)">"#).unwrap();

    if let Some(first) = step.vertices.first() {
        let mut path = format!("M {} {}", first.x, first.y);
        for v in &step.vertices[1..] {
            write!(&mut path, " L {} {}", v.x, v.y).unwrap();
        }
        path.push_str(" Z");

        writeln!(
            &mut svg,
            r#"    <path d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
            path, COLOR, config.fill_opacity, COLOR, config.stroke_width
        )
        .unwrap();
    }

    writeln!(&mut svg, "  </g>").unwrap();
    writeln!(&mut svg, "</svg>").unwrap();

    svg
}

/// Write one `frame-NNNN.svg` per recorded snapshot into `out_dir`.
pub fn render_frames(history: &History, out_dir: &Path, config: &RenderConfig) -> Result<()> {
    for (idx, step) in history.iter().enumerate() {
        let path = out_dir.join(format!("frame-{:04}.svg", idx));
        fs::write(&path, render_svg(step, config))?;
    }
    debug!("wrote {} frames to {}", history.len(), out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use potts_core::R2;

    use super::*;

    fn triangle_step() -> HistoryStep {
        HistoryStep {
            hamiltonian: 0.5,
            vertices: vec![
                R2 { x: 0., y: 0. },
                R2 { x: 1., y: 0. },
                R2 { x: 0.5, y: 1. },
            ],
        }
    }

    #[test]
    fn test_render_svg_structure() {
        let svg = render_svg(&triangle_step(), &RenderConfig::default());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<path"));
        assert!(svg.contains(" Z\""));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_render_frames_writes_one_file_per_snapshot() {
        let history = History(vec![triangle_step(), triangle_step()]);
        let dir = std::env::temp_dir().join("potts-render-frames");
        fs::create_dir_all(&dir).unwrap();
        render_frames(&history, &dir, &RenderConfig::default()).unwrap();
        assert!(dir.join("frame-0000.svg").exists());
        assert!(dir.join("frame-0001.svg").exists());
    }
}
