//! Input validation shared by the public entry points.
//!
//! Every check runs before any numeric work: a failing call returns without
//! touching the image enumeration or the output buffers. Sampling parameters
//! are checked first so a bad sample rate fails identically regardless of the
//! geometry passed alongside it.

use crate::error::{Result, RirError};
use crate::room::{Betas, Point3D, Room};

/// Check the sample rate alone.
pub(crate) fn validate_sample_rate(sample_rate: f64) -> Result<()> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(RirError::InvalidSampling {
            message: format!("sample rate ({}) must be positive and finite", sample_rate),
        });
    }
    Ok(())
}

/// Check the output window parameters.
pub(crate) fn validate_sampling(points: usize, sample_rate: f64) -> Result<()> {
    if points == 0 {
        return Err(RirError::InvalidSampling {
            message: "number of points must be at least 1".to_string(),
        });
    }
    validate_sample_rate(sample_rate)
}

/// Check the wave speed.
pub(crate) fn validate_speed_of_sound(speed_of_sound: f64) -> Result<()> {
    if !speed_of_sound.is_finite() || speed_of_sound <= 0.0 {
        return Err(RirError::InvalidGeometry {
            message: format!(
                "speed of sound ({}) must be positive and finite",
                speed_of_sound
            ),
        });
    }
    Ok(())
}

/// Check the room and both positions.
pub(crate) fn validate_geometry(room: &Room, source: &Point3D, receiver: &Point3D) -> Result<()> {
    room.validate()?;
    for (point, name) in [(source, "source"), (receiver, "receiver")] {
        if !room.contains(point) {
            return Err(RirError::InvalidGeometry {
                message: format!(
                    "{} ({}, {}, {}) must lie strictly inside the room",
                    name, point.x, point.y, point.z
                ),
            });
        }
    }
    Ok(())
}

/// Check the high-pass cutoff against the sample rate.
pub(crate) fn validate_filter_params(cutoff: f64, sample_rate: f64) -> Result<()> {
    if !cutoff.is_finite() || cutoff <= 0.0 || cutoff >= sample_rate / 2.0 {
        return Err(RirError::InvalidFilterParameters {
            message: format!(
                "cutoff ({} Hz) must lie in (0, {} Hz)",
                cutoff,
                sample_rate / 2.0
            ),
        });
    }
    Ok(())
}

/// Run every check a synthesis call needs, sampling first.
pub(crate) fn validate_simulation(
    room: &Room,
    source: &Point3D,
    receiver: &Point3D,
    betas: &Betas,
    points: usize,
    sample_rate: f64,
    speed_of_sound: f64,
) -> Result<()> {
    validate_sampling(points, sample_rate)?;
    validate_speed_of_sound(speed_of_sound)?;
    validate_geometry(room, source, receiver)?;
    betas.validate()
}
