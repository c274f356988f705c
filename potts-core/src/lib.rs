#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod energy;
pub mod error;
pub mod geometry;
pub mod optimization;

pub use energy::hamiltonian::{EnergyState, Targets, Weights};
pub use error::ConfigError;
pub use geometry::polygon::Polygon;
pub use geometry::r2::R2;
pub use optimization::anneal::{AnnealConfig, Annealer};
pub use optimization::history::{History, HistoryStep};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
