//! Error types for Verdant.
//!
//! Generation itself is total over well-formed numeric input; the only
//! fallible operations are configuration validation and file I/O at the
//! binary boundary.

use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Chunk size must be a positive, finite number of world units.
    #[error("chunk size must be positive, got {0}")]
    InvalidChunkSize(f32),

    /// Load distance must be non-negative and finite.
    #[error("load distance must be non-negative, got {0}")]
    InvalidLoadDistance(f32),

    /// Unload factor must be at least 1 so the unload band encloses the
    /// load band.
    #[error("unload factor must be >= 1, got {0}")]
    InvalidUnloadFactor(f32),

    /// A density range with `min > max`.
    #[error("invalid density range: min {min} > max {max}")]
    InvalidDensityRange {
        /// Lower bound of the range
        min: u32,
        /// Upper bound of the range
        max: u32,
    },
}

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
