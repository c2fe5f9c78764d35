//! Unit conversions between meters and sample periods.
//!
//! Early image-method literature works in sample-period units, where one
//! unit is the distance sound travels in one sampling interval. These
//! helpers convert measurements taken in that convention.

/// Convert a measurement in meters to sample periods.
///
/// One sample period of distance is `speed_of_sound / sample_rate` meters.
pub fn meters_to_sample_periods(x: f64, speed_of_sound: f64, sample_rate: f64) -> f64 {
    x * sample_rate / speed_of_sound
}

/// Convert a measurement in sample periods to meters.
pub fn sample_periods_to_meters(x: f64, speed_of_sound: f64, sample_rate: f64) -> f64 {
    x * speed_of_sound / sample_rate
}
