//! Frequency-domain synthesis.
//!
//! Each image source contributes a free-field term `A exp(-j w d / c)` to
//! every frequency bin: the attenuated amplitude delayed by its propagation
//! time. Bins are independent, so the outer loop parallelizes cleanly; the
//! per-bin accumulation stays sequential and the result is deterministic.

use std::f64::consts::PI;

use log::debug;
use ndarray::Array1;
use num_complex::Complex64;
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::image::image_sources;
use crate::room::{Betas, Point3D, Room};
use crate::validate;

/// Compute the frequency-domain room impulse response.
///
/// The output holds one complex pressure per bin for the full spectrum:
/// bin `k` sits at `k * sample_rate / points` Hz.
///
/// # Arguments
/// * `room` - Room geometry
/// * `source` - Source position, strictly inside the room
/// * `receiver` - Receiver position, strictly inside the room
/// * `betas` - Wall reflection coefficients
/// * `points` - Number of frequency bins
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Wave speed, truncation rule and receiver directivity
///
/// # Returns
/// * Complex pressure per bin, or a validation error
///
/// # Reference
/// J. B. Allen and D. A. Berkley, "Image method for efficiently simulating
/// small-room acoustics", J. Acoust. Soc. Am. 65(4), 1979.
pub fn frequency_rir(
    room: &Room,
    source: &Point3D,
    receiver: &Point3D,
    betas: &Betas,
    points: usize,
    sample_rate: f64,
    config: &SimulationConfig,
) -> Result<Array1<Complex64>> {
    validate::validate_simulation(
        room,
        source,
        receiver,
        betas,
        points,
        sample_rate,
        config.speed_of_sound,
    )?;

    let c = config.speed_of_sound;
    let max_distance = c * points as f64 / sample_rate;
    let min_distance = c / sample_rate;

    // One (amplitude, delay) pair per image; reused by every bin.
    let terms: Vec<(f64, f64)> = image_sources(
        room,
        source,
        receiver,
        betas,
        max_distance,
        config.truncation.order_cap(),
    )
    .map(|image| {
        (
            image.amplitude(receiver, &config.microphone, min_distance),
            image.distance / c,
        )
    })
    .collect();
    debug!(
        "summing {} image terms over {} frequency bins",
        terms.len(),
        points
    );

    let bin_width = sample_rate / points as f64;
    let spectrum: Vec<Complex64> = (0..points)
        .into_par_iter()
        .map(|k| {
            let w = 2.0 * PI * k as f64 * bin_width;
            terms
                .iter()
                .fold(Complex64::new(0.0, 0.0), |acc, &(amplitude, delay)| {
                    acc + Complex64::from_polar(amplitude, -w * delay)
                })
        })
        .collect();
    Ok(Array1::from(spectrum))
}
