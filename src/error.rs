//! Error types for the freqrir crate.
//!
//! This module provides a unified error type for all simulation operations.
//! Every public entry point validates its inputs up front and fails with one
//! of these variants before any numeric work begins.

use thiserror::Error;

/// Error type for room impulse response simulation.
#[derive(Debug, Error)]
pub enum RirError {
    /// Room dimensions, positions or the wave speed are unusable.
    #[error("invalid geometry: {message}")]
    InvalidGeometry {
        /// Description of the offending dimension or position.
        message: String,
    },

    /// Sampling parameters (point count, sample rate) are unusable.
    #[error("invalid sampling: {message}")]
    InvalidSampling {
        /// Description of the offending parameter.
        message: String,
    },

    /// High-pass filter parameters are outside the representable range.
    #[error("invalid filter parameters: {message}")]
    InvalidFilterParameters {
        /// Description of the offending parameter.
        message: String,
    },

    /// A wall reflection coefficient is outside `[0, 1]`, or a requested
    /// reverberation time cannot be met by any coefficient set.
    #[error("invalid coefficients: {message}")]
    InvalidCoefficients {
        /// Description of the offending coefficient.
        message: String,
    },
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, RirError>;
