// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image.
//!
//! The energy of a pixel approximates the local gradient magnitude:
//! channel values are normalized to [0, 1], differenced against the
//! pixels one step right and one step down (obtained through two
//! clamped shifts of the whole image), summed, squared to emphasize
//! strong edges, and reduced to a single scalar with the usual
//! luminance weights.  Low energy marks the low-information regions a
//! seam prefers to pass through.

use crate::error::CarveError;
use crate::greedy::GreedyScan;
use crate::seamfinder::{Seam, SeamFinder};
use crate::transform::{shift, Border};
use crate::twodmap::TwoDimensionalMap;
use crate::cq;
use image::{GenericImageView, GrayImage, Pixel, Primitive};
use itertools::iproduct;
use num_traits::{Bounded, NumCast};

/// A per-pixel scalar importance map, same dimensions as the image it
/// was derived from.  Every value is non-negative.
pub type EnergyMap = TwoDimensionalMap<f32>;

const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

// Channel values arrive as whatever sample type the image carries;
// scale them onto [0, 1] by the type's maximum so 8-bit and 16-bit
// sources produce comparable energies.
#[inline]
fn normalized_rgb<P, S>(p: &P) -> [f32; 3]
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let full: f32 = NumCast::from(S::max_value()).unwrap();
    let rgb = p.to_rgb();
    let c = rgb.channels();
    let f = |i: usize| -> f32 {
        let v: f32 = NumCast::from(c[i]).unwrap();
        v / full
    };
    [f(0), f(1), f(2)]
}

/// Compute the energy of every pixel in an image.  Generic over the
/// image type; grayscale pixels pass through the same path with their
/// single channel replicated.
///
/// The two shifted operands use the `Clamp` border policy, so the far
/// row and column difference against themselves and a constant-color
/// image comes out all-zero.
pub fn calculate_energy<I, P, S>(image: &I) -> Result<EnergyMap, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions { width, height });
    }

    let right = shift(image, -1, 0, Border::Clamp);
    let below = shift(image, 0, -1, Border::Clamp);

    let mut emap = EnergyMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let here = normalized_rgb(&image.get_pixel(x, y));
        let dx = normalized_rgb(right.get_pixel(x, y));
        let dy = normalized_rgb(below.get_pixel(x, y));
        let mut e = 0.0f32;
        for i in 0..3 {
            let d = (here[i] - dx[i]).abs() + (here[i] - dy[i]).abs();
            e += d * d * LUMA_WEIGHTS[i];
        }
        emap[(x, y)] = e;
    }
    Ok(emap)
}

/// Render an energy map as an 8-bit grayscale image, scaled so the
/// hottest pixel maps to white.  Strictly a visualization aid.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let mut peak = 0.0f32;
    for (y, x) in iproduct!(0..height, 0..width) {
        if energy[(x, y)] > peak {
            peak = energy[(x, y)];
        }
    }
    let mut out = GrayImage::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let level = cq!(peak > 0.0, energy[(x, y)] / peak * 255.0, 0.0);
        out.put_pixel(x, y, *Pixel::from_slice(&[level as u8]));
    }
    out
}

/// A convenience wrapper: given an image, get back the next
/// top-to-bottom seam for that image.
pub fn calculate_vertical_seam<I, P, S>(image: &I) -> Result<Seam, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let energy = calculate_energy(image)?;
    let (seam, _) = GreedyScan.find_vertical_seam(&energy)?;
    Ok(seam)
}

/// A convenience wrapper: given an image, get back the next
/// left-to-right seam for that image.
pub fn calculate_horizontal_seam<I, P, S>(image: &I) -> Result<Seam, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let energy = calculate_energy(image)?;
    let (seam, _) = GreedyScan.find_horizontal_seam(&energy)?;
    Ok(seam)
}
