//! Error types for the driftfield core.

use thiserror::Error;

/// Errors produced by scene and surface operations.
///
/// All of these arise at construction or reconfiguration time; per-frame
/// arithmetic is total and never fails.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Width or height was zero, negative, or non-finite.
    #[error("invalid dimensions: width and height must be positive")]
    InvalidDimensions,

    /// A configuration field held a value that would produce degenerate
    /// geometry (zero pitch, zero radii, out-of-range fraction).
    #[error("invalid config: {name} {reason}")]
    InvalidConfig {
        name: &'static str,
        reason: &'static str,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A requested scene name was not found in the registry.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
