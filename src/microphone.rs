//! Receiver directivity.
//!
//! Models the receiver as a first-order microphone: the gain toward a sound
//! arriving from a given direction is `rho + (1 - rho) * cos(angle)`, where
//! `rho` selects the polar pattern and `angle` is measured against the
//! microphone's orientation. The gain is frequency independent.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// First-order polar pattern of the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolarPattern {
    #[serde(rename = "omnidirectional")]
    #[default]
    Omnidirectional,
    #[serde(rename = "subcardioid")]
    Subcardioid,
    #[serde(rename = "cardioid")]
    Cardioid,
    #[serde(rename = "hypercardioid")]
    Hypercardioid,
    #[serde(rename = "bidirectional")]
    Bidirectional,
}

impl PolarPattern {
    /// Pressure gradient weight of the pattern.
    pub fn rho(&self) -> f64 {
        match self {
            PolarPattern::Omnidirectional => 1.0,
            PolarPattern::Subcardioid => 0.75,
            PolarPattern::Cardioid => 0.5,
            PolarPattern::Hypercardioid => 0.25,
            PolarPattern::Bidirectional => 0.0,
        }
    }
}

/// Receiver directivity: a polar pattern plus an orientation.
///
/// Azimuth rotates the pattern in the horizontal plane (0 points along +x),
/// elevation tilts it out of the plane. Both in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Microphone {
    #[serde(default)]
    pub pattern: PolarPattern,
    #[serde(default)]
    pub azimuth: f64,
    #[serde(default)]
    pub elevation: f64,
}

impl Microphone {
    pub fn new(pattern: PolarPattern, azimuth: f64, elevation: f64) -> Self {
        Self {
            pattern,
            azimuth,
            elevation,
        }
    }

    /// Gain toward a sound arriving from direction `(dx, dy, dz)` relative to
    /// the receiver position.
    ///
    /// A zero direction vector (a source on top of the receiver) has no
    /// meaningful incidence angle and gets unit gain.
    pub fn gain(&self, dx: f64, dy: f64, dz: f64) -> f64 {
        if self.pattern == PolarPattern::Omnidirectional {
            return 1.0;
        }
        let r = (dx * dx + dy * dy + dz * dz).sqrt();
        if r == 0.0 {
            return 1.0;
        }

        let vartheta = (dz / r).acos();
        let varphi = dy.atan2(dx);
        let incidence = (FRAC_PI_2 - self.elevation).sin()
            * vartheta.sin()
            * (self.azimuth - varphi).cos()
            + (FRAC_PI_2 - self.elevation).cos() * vartheta.cos();

        let rho = self.pattern.rho();
        rho + (1.0 - rho) * incidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rho_values() {
        assert_eq!(PolarPattern::Omnidirectional.rho(), 1.0);
        assert_eq!(PolarPattern::Subcardioid.rho(), 0.75);
        assert_eq!(PolarPattern::Cardioid.rho(), 0.5);
        assert_eq!(PolarPattern::Hypercardioid.rho(), 0.25);
        assert_eq!(PolarPattern::Bidirectional.rho(), 0.0);
    }

    #[test]
    fn test_omnidirectional_is_unity_everywhere() {
        let mic = Microphone::default();
        assert_eq!(mic.gain(1.0, 0.0, 0.0), 1.0);
        assert_eq!(mic.gain(0.0, -2.0, 3.0), 1.0);
        assert_eq!(mic.gain(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_cardioid_front_and_back() {
        let mic = Microphone::new(PolarPattern::Cardioid, 0.0, 0.0);
        // On axis: full gain. Directly behind: null.
        assert!((mic.gain(1.0, 0.0, 0.0) - 1.0).abs() < 1e-12);
        assert!(mic.gain(-1.0, 0.0, 0.0).abs() < 1e-12);
        // Side incidence sits halfway.
        assert!((mic.gain(0.0, 1.0, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bidirectional_rejects_perpendicular() {
        let mic = Microphone::new(PolarPattern::Bidirectional, 0.0, 0.0);
        assert!((mic.gain(1.0, 0.0, 0.0) - 1.0).abs() < 1e-12);
        assert!((mic.gain(-1.0, 0.0, 0.0) + 1.0).abs() < 1e-12);
        assert!(mic.gain(0.0, 0.0, 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_azimuth_steers_the_pattern() {
        use std::f64::consts::FRAC_PI_2;
        // Cardioid facing +y: null toward -y.
        let mic = Microphone::new(PolarPattern::Cardioid, FRAC_PI_2, 0.0);
        assert!((mic.gain(0.0, 1.0, 0.0) - 1.0).abs() < 1e-12);
        assert!(mic.gain(0.0, -1.0, 0.0).abs() < 1e-12);
    }
}
