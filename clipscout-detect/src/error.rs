//! Error types for clipscout-detect organized by detection stage.

use thiserror::Error;

/// Detection error variants.
///
/// Signal adapters never surface errors; they degrade to empty signals. The
/// only failures a caller can see are configuration contract violations and
/// the no-highlights outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The heuristic scan produced no viable candidates
    #[error("no highlights detected")]
    NoHighlights,
}

impl Error {
    /// Message suitable for an end user. Not retryable with the same inputs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Config(_) => "Invalid detection settings.",
            Error::NoHighlights => {
                "Could not detect any highlights. Try a longer video or different content."
            }
        }
    }
}

/// Configuration contract violations, rejected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Duration bounds must satisfy 0 < min <= max
    #[error("invalid duration bounds: min {min}s must be positive and at most max {max}s")]
    InvalidDurationBounds { min: f32, max: f32 },

    /// At least one clip must be requested
    #[error("max clip count must be at least 1")]
    ZeroClipCount,

    /// Weights must be finite and non-negative
    #[error("invalid {name} weight: {value}")]
    InvalidWeight { name: &'static str, value: f32 },

    /// All-zero weights make every window score zero
    #[error("signal weights are all zero")]
    ZeroWeights,

    /// Scan step must be positive
    #[error("invalid scan step: {0}s")]
    InvalidStep(f32),
}

/// Audio loading and validation errors.
///
/// The loudness adapter absorbs these at its boundary; they only reach
/// callers using the WAV loader directly.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Channel count validation failed
    #[error("invalid channel count: expected mono or stereo, got {0} channels")]
    InvalidChannels(u16),

    /// IO error during audio loading
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// WAV file format error
    #[error(transparent)]
    Hound(#[from] hound::Error),
}

/// Result type alias for clipscout-detect operations.
pub type Result<T> = std::result::Result<T, Error>;
