//! Room geometry and wall reflection coefficients.
//!
//! A room is an axis-aligned rectangular box with one corner at the origin.
//! Walls are identified per axis: the near wall sits at coordinate 0, the far
//! wall at the room dimension. Each wall carries a pressure reflection
//! coefficient in `[0, 1]` (0 = fully absorptive, 1 = fully reflective).

use serde::{Deserialize, Serialize};

use crate::error::{Result, RirError};

// ============================================================================
// Positions
// ============================================================================

/// A point in 3D space, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

// ============================================================================
// Room
// ============================================================================

/// Rectangular room with one corner at the origin, dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Room {
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Room dimensions as `[width, depth, height]`.
    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.depth, self.height]
    }

    /// Room volume in cubic meters.
    pub fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }

    /// Total interior surface area in square meters.
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.width * self.depth + self.width * self.height + self.depth * self.height)
    }

    /// Check that a point lies strictly inside the room.
    ///
    /// Points on a wall count as outside: a source or receiver pressed
    /// against a wall coincides with its own mirror image.
    pub fn contains(&self, p: &Point3D) -> bool {
        p.x > 0.0
            && p.x < self.width
            && p.y > 0.0
            && p.y < self.depth
            && p.z > 0.0
            && p.z < self.height
    }

    /// Check that all dimensions are positive and finite.
    pub fn validate(&self) -> Result<()> {
        for (dim, name) in [
            (self.width, "width"),
            (self.depth, "depth"),
            (self.height, "height"),
        ] {
            if !dim.is_finite() || dim <= 0.0 {
                return Err(RirError::InvalidGeometry {
                    message: format!("room {} ({}) must be positive and finite", name, dim),
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Wall reflection coefficients
// ============================================================================

/// Pressure reflection coefficients for the six walls, grouped per axis.
///
/// Each axis holds `[near, far]`: the wall at coordinate 0 first, the wall at
/// the room dimension second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Betas {
    /// Walls perpendicular to the x axis (left, right).
    pub x: [f64; 2],
    /// Walls perpendicular to the y axis (front, back).
    pub y: [f64; 2],
    /// Walls perpendicular to the z axis (floor, ceiling).
    pub z: [f64; 2],
}

impl Betas {
    pub fn new(x: [f64; 2], y: [f64; 2], z: [f64; 2]) -> Self {
        Self { x, y, z }
    }

    /// Coefficients `[near, far]` for axis 0, 1 or 2.
    pub fn for_axis(&self, axis: usize) -> [f64; 2] {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Check that every coefficient lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (pair, name) in [(self.x, "x"), (self.y, "y"), (self.z, "z")] {
            for (side, beta) in ["near", "far"].iter().zip(pair) {
                if !(0.0..=1.0).contains(&beta) {
                    return Err(RirError::InvalidCoefficients {
                        message: format!(
                            "reflection coefficient for {} {} wall ({}) must be in [0, 1]",
                            name, side, beta
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

impl From<f64> for Betas {
    /// A single coefficient shared by all six walls.
    fn from(beta: f64) -> Self {
        Self {
            x: [beta; 2],
            y: [beta; 2],
            z: [beta; 2],
        }
    }
}

impl From<[f64; 6]> for Betas {
    /// Coefficients in wall order `[x near, x far, y near, y far, z near, z far]`.
    fn from(beta: [f64; 6]) -> Self {
        Self {
            x: [beta[0], beta[1]],
            y: [beta[2], beta[3]],
            z: [beta[4], beta[5]],
        }
    }
}

// ============================================================================
// Reverberation time
// ============================================================================

/// Derive a uniform wall coefficient set from a target reverberation time
/// using Sabine's formula.
///
/// The absorption needed to reach `t60` is `alpha = 24 V ln(10) / (c S t60)`;
/// every wall gets the reflection coefficient `sqrt(1 - alpha)`.
///
/// # Arguments
/// * `room` - Room geometry
/// * `t60` - Target reverberation time in seconds
/// * `speed_of_sound` - Wave speed in m/s
///
/// # Returns
/// * Uniform coefficients reaching `t60`, or `InvalidCoefficients` when the
///   room cannot be made absorptive enough
///
/// # Reference
/// W. C. Sabine, Collected Papers on Acoustics, 1922.
pub fn betas_for_reverberation_time(room: &Room, t60: f64, speed_of_sound: f64) -> Result<Betas> {
    room.validate()?;
    crate::validate::validate_speed_of_sound(speed_of_sound)?;
    if !t60.is_finite() || t60 <= 0.0 {
        return Err(RirError::InvalidCoefficients {
            message: format!("reverberation time ({}) must be positive and finite", t60),
        });
    }

    let alpha =
        24.0 * room.volume() * 10f64.ln() / (speed_of_sound * room.surface_area() * t60);
    if alpha > 1.0 {
        return Err(RirError::InvalidCoefficients {
            message: format!(
                "reverberation time {} s is unreachable for this room (needs absorption {:.3})",
                t60, alpha
            ),
        });
    }
    Ok(Betas::from((1.0 - alpha).sqrt()))
}

/// Estimate the reverberation time of a room with the given wall coefficients
/// using Sabine's formula.
///
/// Returns infinity for a lossless room (all coefficients 1). Callers sizing
/// an output window can take `t60 * sample_rate` samples.
pub fn reverberation_time(room: &Room, betas: &Betas, speed_of_sound: f64) -> f64 {
    let absorption = (2.0 - betas.x[0].powi(2) - betas.x[1].powi(2)) * room.depth * room.height
        + (2.0 - betas.y[0].powi(2) - betas.y[1].powi(2)) * room.width * room.height
        + (2.0 - betas.z[0].powi(2) - betas.z[1].powi(2)) * room.width * room.depth;
    if absorption > 0.0 {
        24.0 * 10f64.ln() * room.volume() / (speed_of_sound * absorption)
    } else {
        f64::INFINITY
    }
}
