#![doc = include_str!("../README.md")]

/// Error types for simulation operations.
pub mod error;
pub use error::{Result, RirError};

/// Simulation configuration: wave speed, truncation, directivity, filtering.
pub mod config;
/// High-pass filtering of time-domain responses.
pub mod filter;
/// Image-source enumeration.
pub mod image;
/// Time-domain synthesis.
pub mod impulse;
/// Receiver directivity.
pub mod microphone;
/// Room geometry and wall reflection coefficients.
pub mod room;
/// Frequency-domain synthesis.
pub mod spectrum;
/// Unit conversions between meters and sample periods.
pub mod units;

mod validate;

// Re-export commonly used items
pub use config::{SimulationConfig, Truncation};
pub use filter::high_pass_filter;
pub use image::{distance_for_permutations, image_sources, ImageSource, ImageSourceIter};
pub use impulse::time_rir;
pub use microphone::{Microphone, PolarPattern};
pub use room::{betas_for_reverberation_time, reverberation_time, Betas, Point3D, Room};
pub use spectrum::frequency_rir;
pub use units::{meters_to_sample_periods, sample_periods_to_meters};
