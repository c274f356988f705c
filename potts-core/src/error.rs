#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("Sweep count must be at least 1")]
    ZeroSweeps,

    #[error("Temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),

    #[error("Jiggle radius must be positive, got {0}")]
    NonPositiveJiggleRadius(f64),
}
