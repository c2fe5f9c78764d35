//! Image-source enumeration.
//!
//! Reflecting the source across the walls of a rectangular room produces a
//! lattice of virtual sources whose free-field contributions sum to the
//! reverberant field inside the room. On each axis the mirror images of a
//! source at `s` sit at `2mL + s` and `2mL - s` for every integer `m` (room
//! length `L`); a 3D image combines one choice per axis.
//!
//! Each per-axis image is indexed by a single signed count `n`:
//! the image sits at `n*L + s` for even `n` and `(n+1)*L - s` for odd `n`,
//! it bounced `|floor(n/2)|` times off the near wall and `|ceil(n/2)|` times
//! off the far wall, and `|n|` is its total bounce count on the axis. The
//! direct path is `n = 0` on all three axes.
//!
//! Enumeration is bounded by a maximum propagation distance: the per-axis
//! mirror range is derived from it, and every candidate is distance-checked,
//! so only images that can arrive within the output window are produced.
//!
//! # Reference
//! J. B. Allen and D. A. Berkley, "Image method for efficiently simulating
//! small-room acoustics", J. Acoust. Soc. Am. 65(4), 1979.

use std::f64::consts::PI;

use log::debug;

use crate::error::{Result, RirError};
use crate::microphone::Microphone;
use crate::room::{Betas, Point3D, Room};
use crate::validate;

/// A virtual source produced by mirroring the true source across the walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSource {
    /// Signed per-axis bounce counts; `[0, 0, 0]` is the direct path.
    pub reflections: [i32; 3],
    /// Mirrored source position in meters.
    pub position: Point3D,
    /// Product of the wall reflection coefficients along the bounce path.
    pub attenuation: f64,
    /// Euclidean distance from the mirrored position to the receiver.
    pub distance: f64,
}

impl ImageSource {
    /// Pressure amplitude this image contributes at the receiver: the
    /// directivity gain toward the image, times the accumulated wall
    /// attenuation, over spherical spreading. The spreading denominator is
    /// clamped to `min_distance` so a receiver coincident with the source
    /// stays finite.
    pub(crate) fn amplitude(
        &self,
        receiver: &Point3D,
        microphone: &Microphone,
        min_distance: f64,
    ) -> f64 {
        let gain = microphone.gain(
            self.position.x - receiver.x,
            self.position.y - receiver.y,
            self.position.z - receiver.z,
        );
        gain * self.attenuation / (4.0 * PI * self.distance.max(min_distance))
    }
}

/// One mirror image restricted to a single axis.
#[derive(Debug, Clone, Copy)]
struct AxisImage {
    /// Image coordinate minus receiver coordinate.
    delta: f64,
    /// Signed bounce count.
    count: i32,
    /// Product of this axis' wall coefficients along the bounce path.
    attenuation: f64,
}

/// Enumerate the mirror images of one axis that can lie within
/// `max_distance` of the receiver.
fn axis_images(
    length: f64,
    source: f64,
    receiver: f64,
    betas: [f64; 2],
    max_distance: f64,
) -> Vec<AxisImage> {
    let periods = (max_distance / (2.0 * length)).ceil() as i64;
    let mut images = Vec::new();
    for p in (-2 * periods - 1)..=(2 * periods) {
        let coordinate = if p % 2 == 0 {
            p as f64 * length + source
        } else {
            (p + 1) as f64 * length - source
        };
        let delta = coordinate - receiver;
        // The 3D distance is at least the per-axis offset, so anything
        // farther than max_distance on one axis can never survive the
        // final distance check.
        if delta.abs() > max_distance {
            continue;
        }
        let near = p.div_euclid(2).unsigned_abs() as i32;
        let far = (p + 1).div_euclid(2).unsigned_abs() as i32;
        images.push(AxisImage {
            delta,
            count: p as i32,
            attenuation: betas[0].powi(near) * betas[1].powi(far),
        });
    }
    images
}

/// Lazy iterator over the image sources of a room.
///
/// Produced by [`image_sources`]. Yields every image whose distance to the
/// receiver is within the enumeration bound, in a fixed axis-major order.
pub struct ImageSourceIter {
    axes: [Vec<AxisImage>; 3],
    receiver: Point3D,
    max_distance: f64,
    max_order: Option<u32>,
    ix: usize,
    iy: usize,
    iz: usize,
}

impl Iterator for ImageSourceIter {
    type Item = ImageSource;

    fn next(&mut self) -> Option<ImageSource> {
        loop {
            if self.ix >= self.axes[0].len() {
                return None;
            }
            let ax = self.axes[0][self.ix];
            let ay = self.axes[1][self.iy];
            let az = self.axes[2][self.iz];

            self.iz += 1;
            if self.iz == self.axes[2].len() {
                self.iz = 0;
                self.iy += 1;
                if self.iy == self.axes[1].len() {
                    self.iy = 0;
                    self.ix += 1;
                }
            }

            if let Some(cap) = self.max_order {
                let order =
                    ax.count.unsigned_abs() + ay.count.unsigned_abs() + az.count.unsigned_abs();
                if order > cap {
                    continue;
                }
            }

            let distance =
                (ax.delta * ax.delta + ay.delta * ay.delta + az.delta * az.delta).sqrt();
            if distance > self.max_distance {
                continue;
            }

            return Some(ImageSource {
                reflections: [ax.count, ay.count, az.count],
                position: Point3D::new(
                    self.receiver.x + ax.delta,
                    self.receiver.y + ay.delta,
                    self.receiver.z + az.delta,
                ),
                attenuation: ax.attenuation * ay.attenuation * az.attenuation,
                distance,
            });
        }
    }
}

/// Enumerate the image sources within `max_distance` meters of the receiver.
///
/// Inputs are assumed valid; the synthesis entry points validate before
/// calling. `max_order`, when given, additionally drops images with more
/// than that many wall bounces in total.
///
/// # Arguments
/// * `room` - Room geometry
/// * `source` - True source position
/// * `receiver` - Receiver position
/// * `betas` - Wall reflection coefficients
/// * `max_distance` - Enumeration bound in meters
/// * `max_order` - Optional cap on total bounces per image
pub fn image_sources(
    room: &Room,
    source: &Point3D,
    receiver: &Point3D,
    betas: &Betas,
    max_distance: f64,
    max_order: Option<u32>,
) -> ImageSourceIter {
    let axes = [
        axis_images(room.width, source.x, receiver.x, betas.x, max_distance),
        axis_images(room.depth, source.y, receiver.y, betas.y, max_distance),
        axis_images(room.height, source.z, receiver.z, betas.z, max_distance),
    ];
    debug!(
        "image scan: {} x {} x {} axis entries within {:.2} m",
        axes[0].len(),
        axes[1].len(),
        axes[2].len(),
        max_distance
    );

    // An empty axis means nothing can be in range; start exhausted so the
    // odometer never indexes into it.
    let ix = if axes.iter().any(|a| a.is_empty()) {
        usize::MAX
    } else {
        0
    };
    ImageSourceIter {
        axes,
        receiver: *receiver,
        max_distance,
        max_order,
        ix,
        iy: 0,
        iz: 0,
    }
}

/// Enumerate image distances for inspection, without attenuation.
///
/// Returns the signed per-axis bounce counts and the distance to the
/// receiver for every image within `max_distance` meters, in enumeration
/// order.
///
/// # Arguments
/// * `room` - Room geometry
/// * `source` - True source position
/// * `receiver` - Receiver position
/// * `max_distance` - Enumeration bound in meters
pub fn distance_for_permutations(
    room: &Room,
    source: &Point3D,
    receiver: &Point3D,
    max_distance: f64,
) -> Result<Vec<([i32; 3], f64)>> {
    validate::validate_geometry(room, source, receiver)?;
    if !max_distance.is_finite() || max_distance < 0.0 {
        return Err(RirError::InvalidGeometry {
            message: format!(
                "maximum distance ({}) must be non-negative and finite",
                max_distance
            ),
        });
    }
    Ok(
        image_sources(room, source, receiver, &Betas::from(1.0), max_distance, None)
            .map(|image| (image.reflections, image.distance))
            .collect(),
    )
}
