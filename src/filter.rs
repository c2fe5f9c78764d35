//! High-pass filtering of time-domain responses.
//!
//! The discrete image summation leaves a DC and near-DC bias that has no
//! physical counterpart. The second-order filter proposed alongside the
//! original image method removes it; the numerator is built so its gain at
//! DC is exactly zero.

use ndarray::Array1;

use crate::error::Result;
use crate::validate;

/// High-pass filter a signal with the Allen-Berkley second-order design.
///
/// The filter runs causally with zero initial state, so the output has the
/// same length as the input and no added latency. Coefficients follow from
/// the cutoff: with `w = 2 pi cutoff / sample_rate` and `r = exp(-w)`,
///
/// ```text
/// b1 = 2 r cos(w)    a1 = -(1 + r)
/// b2 = -r^2          a2 = r
/// ```
///
/// # Arguments
/// * `signal` - Input samples
/// * `cutoff` - Cutoff frequency in Hz, in `(0, sample_rate / 2)`
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// * Filtered samples, or `InvalidSampling` / `InvalidFilterParameters` on
///   bad parameters
///
/// # Reference
/// J. B. Allen and D. A. Berkley, "Image method for efficiently simulating
/// small-room acoustics", J. Acoust. Soc. Am. 65(4), 1979.
pub fn high_pass_filter(
    signal: &Array1<f64>,
    cutoff: f64,
    sample_rate: f64,
) -> Result<Array1<f64>> {
    validate::validate_sample_rate(sample_rate)?;
    validate::validate_filter_params(cutoff, sample_rate)?;

    let w = 2.0 * std::f64::consts::PI * cutoff / sample_rate;
    let r1 = (-w).exp();
    let b1 = 2.0 * r1 * w.cos();
    let b2 = -r1 * r1;
    let a1 = -(1.0 + r1);
    let a2 = r1;

    let mut y = [0.0f64; 3];
    let mut output = Array1::zeros(signal.len());
    for (out, &x0) in output.iter_mut().zip(signal.iter()) {
        y[2] = y[1];
        y[1] = y[0];
        y[0] = b1 * y[1] + b2 * y[2] + x0;
        *out = y[0] + a1 * y[1] + a2 * y[2];
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_parameters() {
        let signal = Array1::zeros(16);
        assert!(high_pass_filter(&signal, 100.0, 0.0).is_err());
        assert!(high_pass_filter(&signal, 0.0, 16000.0).is_err());
        assert!(high_pass_filter(&signal, 8000.0, 16000.0).is_err());
        assert!(high_pass_filter(&signal, 100.0, 16000.0).is_ok());
    }

    #[test]
    fn test_preserves_length_and_first_sample() {
        let signal = Array1::from(vec![0.5, 0.25, 0.0, -0.25]);
        let out = high_pass_filter(&signal, 100.0, 8000.0).unwrap();
        assert_eq!(out.len(), 4);
        // Zero initial state: the first output sample is the first input.
        assert!((out[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_attenuates_dc() {
        let signal = Array1::from_elem(512, 1.0);
        let out = high_pass_filter(&signal, 100.0, 8000.0).unwrap();
        let mean_in = signal.iter().map(|x| x.abs()).sum::<f64>() / 512.0;
        let mean_out = out.iter().map(|x: &f64| x.abs()).sum::<f64>() / 512.0;
        assert!(mean_out < mean_in);
        // The tail settles toward zero once the transient has passed.
        assert!(out[511].abs() < 0.05);
    }

    #[test]
    fn test_zero_signal_stays_zero() {
        let signal = Array1::zeros(64);
        let out = high_pass_filter(&signal, 100.0, 8000.0).unwrap();
        assert!(out.iter().all(|x: &f64| *x == 0.0));
    }
}
