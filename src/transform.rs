// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two geometric primitives the carving pipeline leans on:
//! a whole-image shift with a pinned border policy, and a uniform
//! resize.  Everything else geometric lives outside this crate.

use crate::cq;
use crate::error::CarveError;
use image::{imageops, FilterType, GenericImageView, ImageBuffer, Pixel, Primitive};

/// What a shifted image shows where the source has no pixel.  The
/// policy is an explicit argument: the gradient code needs `Clamp`
/// (edge replication), and inheriting whatever an affine primitive
/// happens to do at the borders is exactly the ambiguity this enum
/// exists to remove.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Border {
    /// Repeat the nearest edge pixel.
    Clamp,
    /// Wrap around to the opposite edge.
    Wrap,
}

/// Shift the whole image by `(dx, dy)`, keeping its dimensions.  The
/// output at `(x, y)` is the input at `(x - dx, y - dy)`, with
/// out-of-bounds reads resolved by `border`.
pub fn shift<I, P, S>(image: &I, dx: i32, dy: i32, border: Border) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (w, h) = (i64::from(width), i64::from(height));
    ImageBuffer::from_fn(width, height, |x, y| {
        let sx = i64::from(x) - i64::from(dx);
        let sy = i64::from(y) - i64::from(dy);
        let (sx, sy) = match border {
            Border::Clamp => (
                cq!(sx < 0, 0, cq!(sx >= w, w - 1, sx)),
                cq!(sy < 0, 0, cq!(sy >= h, h - 1, sy)),
            ),
            Border::Wrap => (sx.rem_euclid(w), sy.rem_euclid(h)),
        };
        image.get_pixel(sx as u32, sy as u32)
    })
}

/// Uniform (non-content-aware) resize to exact target dimensions,
/// bilinear.  Runs once, after all seam removal is done; it corrects
/// residual scale, never aspect ratio.
pub fn resize<I, P, S>(
    image: &I,
    width: u32,
    height: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P> + 'static,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions { width, height });
    }
    Ok(imageops::resize(image, width, height, FilterType::Triangle))
}
