//! Time-domain synthesis.
//!
//! Each image source lands as one attenuated impulse at its propagation
//! delay, rounded to the nearest sample; images rounding to the same sample
//! accumulate. The image stream is consumed lazily so high truncation orders
//! never materialize the image set. The high-pass stage configured in
//! [`SimulationConfig`] runs last.

use log::debug;
use ndarray::Array1;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::filter::high_pass_filter;
use crate::image::image_sources;
use crate::room::{Betas, Point3D, Room};
use crate::validate;

/// Compute the time-domain room impulse response.
///
/// The output holds `points` samples at `sample_rate`. When
/// `config.highpass_cutoff` is set (the default), the summed response is
/// passed through [`high_pass_filter`] before being returned; `None` skips
/// the stage and returns the raw summation.
///
/// # Arguments
/// * `room` - Room geometry
/// * `source` - Source position, strictly inside the room
/// * `receiver` - Receiver position, strictly inside the room
/// * `betas` - Wall reflection coefficients
/// * `points` - Number of output samples
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Wave speed, truncation rule, directivity and filter cutoff
///
/// # Returns
/// * Pressure per sample, or a validation error
///
/// # Reference
/// J. B. Allen and D. A. Berkley, "Image method for efficiently simulating
/// small-room acoustics", J. Acoust. Soc. Am. 65(4), 1979.
pub fn time_rir(
    room: &Room,
    source: &Point3D,
    receiver: &Point3D,
    betas: &Betas,
    points: usize,
    sample_rate: f64,
    config: &SimulationConfig,
) -> Result<Array1<f64>> {
    validate::validate_simulation(
        room,
        source,
        receiver,
        betas,
        points,
        sample_rate,
        config.speed_of_sound,
    )?;
    if let Some(cutoff) = config.highpass_cutoff {
        validate::validate_filter_params(cutoff, sample_rate)?;
    }

    let c = config.speed_of_sound;
    let max_distance = c * points as f64 / sample_rate;
    let min_distance = c / sample_rate;

    let mut response = Array1::zeros(points);
    let mut placed = 0usize;
    for image in image_sources(
        room,
        source,
        receiver,
        betas,
        max_distance,
        config.truncation.order_cap(),
    ) {
        let arrival = (image.distance / c * sample_rate).round();
        // The enumeration bound is a distance, so an image can still round
        // past the last sample.
        if arrival < points as f64 {
            response[arrival as usize] +=
                image.amplitude(receiver, &config.microphone, min_distance);
            placed += 1;
        }
    }
    debug!("placed {} image arrivals in {} samples", placed, points);

    match config.highpass_cutoff {
        Some(cutoff) => high_pass_filter(&response, cutoff, sample_rate),
        None => Ok(response),
    }
}
