//! CLI for the circular Potts polygon annealer.
//!
//! Provides:
//! - `run`: anneal a polygon and write its trajectory (plus optional SVG
//!   frames and STL mesh) into an output folder
//! - `render`: re-render SVG frames from a previously saved trajectory

mod mesh;
mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use potts_core::{AnnealConfig, Annealer, History};

#[derive(Parser)]
#[command(name = "potts")]
#[command(about = "Polygon shape annealer (circular Potts model)", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an annealing simulation
    Run {
        /// Number of polygon vertices
        #[arg(short, long, default_value = "100")]
        n_vertices: usize,

        /// Number of sweeps (one proposed move per vertex per sweep)
        #[arg(short, long, default_value = "400")]
        sweeps: usize,

        /// Output directory
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Target area as a multiple of the starting area
        #[arg(long, default_value = "1.0")]
        area_target: f64,

        /// Weight of the area term in the Hamiltonian
        #[arg(long, default_value = "0.6")]
        area_weight: f64,

        /// Target perimeter as a multiple of the starting perimeter
        #[arg(long, default_value = "2.0")]
        perimeter_target: f64,

        /// Weight of the perimeter term in the Hamiltonian
        #[arg(long, default_value = "0.0")]
        perimeter_weight: f64,

        /// Weight of the angular smoothness term in the Hamiltonian
        #[arg(long, default_value = "2000.0")]
        angle_weight: f64,

        /// Target edge length as a multiple of the starting mean edge length
        #[arg(long, default_value = "6.0")]
        length_target: f64,

        /// Weight of the edge-length uniformity term in the Hamiltonian
        #[arg(long, default_value = "10.0")]
        length_weight: f64,

        /// Metropolis temperature (constant for the run)
        #[arg(short, long, default_value = "0.05")]
        temperature: f64,

        /// Per-coordinate radius of proposed vertex moves
        #[arg(short, long, default_value = "0.02")]
        jiggle_radius: f64,

        /// RNG seed for a reproducible run (omit to seed from entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Render an SVG frame per recorded sweep
        #[arg(long)]
        animate: bool,

        /// Export the trajectory as a stacked STL mesh
        #[arg(long)]
        mesh: bool,
    },

    /// Re-render SVG frames from a saved trajectory
    Render {
        /// Trajectory file (points.json from a previous run)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(potts_core::parse_log_level(cli.log_level.as_deref()))
        .init();

    match cli.command {
        Commands::Run {
            n_vertices,
            sweeps,
            out_dir,
            area_target,
            area_weight,
            perimeter_target,
            perimeter_weight,
            angle_weight,
            length_target,
            length_weight,
            temperature,
            jiggle_radius,
            seed,
            animate,
            mesh,
        } => {
            let config = AnnealConfig {
                n_vertices,
                sweeps,
                jiggle_radius,
                temperature,
                area_target,
                area_weight,
                perimeter_target,
                perimeter_weight,
                angle_weight,
                length_target,
                length_weight,
                seed,
            };
            fs::create_dir_all(&out_dir)?;

            let mut annealer = Annealer::new(config)?;
            let history = annealer.run().clone();
            info!(
                "annealed {} vertices over {} sweeps, final H = {:.6}",
                n_vertices, sweeps, annealer.energy(),
            );

            history.save(out_dir.join("points.json"))?;
            if animate {
                render::render_frames(&history, &out_dir, &render::RenderConfig::default())?;
            }
            if mesh {
                mesh::export_stl(&history, &out_dir.join("mesh.stl"), 2.0)?;
            }
        }
        Commands::Render { input, out_dir } => {
            let history = History::load(&input)?;
            fs::create_dir_all(&out_dir)?;
            render::render_frames(&history, &out_dir, &render::RenderConfig::default())?;
            info!("rendered {} frames to {}", history.len(), out_dir.display());
        }
    }
    Ok(())
}
