use thiserror::Error;

/// Errors that can occur while loading or validating an [`crate::EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Smoothing factor must be within [0, 1], got {0}")]
    InvalidSmoothingFactor(f64),

    #[error("Threshold `{name}` must be positive, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("Invalid brush size range [{min}, {max}]")]
    InvalidBrushRange { min: u32, max: u32 },

    #[error("Initial brush size {size} is outside [{min}, {max}]")]
    InitialSizeOutOfRange { size: u32, min: u32, max: u32 },

    #[error("Palette must contain at least one color")]
    EmptyPalette,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
