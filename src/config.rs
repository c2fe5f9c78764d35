//! Simulation configuration.
//!
//! Gathers the knobs that are easy to leave implicit: the wave speed, the
//! image truncation rule, the receiver directivity and the high-pass stage.
//! All fields have serde defaults so a partial (or empty) JSON document
//! deserializes to a working configuration.

use serde::{Deserialize, Serialize};

use crate::microphone::Microphone;

/// Image truncation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Truncation {
    /// Keep every image whose propagation delay fits in the output window.
    /// The per-axis mirror range is derived from the room size and the
    /// window length.
    #[serde(rename = "auto")]
    #[default]
    Auto,
    /// Additionally drop images with more than `order` wall bounces in
    /// total across the three axes. `order` 0 keeps only the direct path.
    #[serde(rename = "max-order")]
    MaxOrder { order: u32 },
}

impl Truncation {
    /// The bounce cap, if this rule has one.
    pub fn order_cap(&self) -> Option<u32> {
        match self {
            Truncation::Auto => None,
            Truncation::MaxOrder { order } => Some(*order),
        }
    }
}

/// Configuration for both synthesis domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Wave speed in m/s. Defaults to 343 m/s (air at 20 °C).
    #[serde(default = "default_speed_of_sound")]
    pub speed_of_sound: f64,
    /// Image truncation rule. Defaults to window-derived truncation.
    #[serde(default)]
    pub truncation: Truncation,
    /// Receiver directivity. Defaults to omnidirectional.
    #[serde(default)]
    pub microphone: Microphone,
    /// Cutoff of the high-pass stage applied to time-domain output, in Hz.
    /// Defaults to 100 Hz; `None` disables the stage.
    #[serde(default = "default_highpass_cutoff")]
    pub highpass_cutoff: Option<f64>,
}

fn default_speed_of_sound() -> f64 {
    343.0
}
fn default_highpass_cutoff() -> Option<f64> {
    Some(100.0)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed_of_sound: default_speed_of_sound(),
            truncation: Truncation::default(),
            microphone: Microphone::default(),
            highpass_cutoff: default_highpass_cutoff(),
        }
    }
}
