// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal.
//!
//! Each iteration recomputes the energy map on the already-shrunk
//! image, finds one seam, and copies every other pixel into a buffer
//! one row or column smaller.  Recomputation is mandatory: content
//! and energy shift after every removal.  The intermediate map, seam
//! and image all die with their iteration.

// TODO: The two directions are so close to each other in
// implementation that I have trouble believing I can't create an
// abstraction for it.  But maybe it's faster and clearer this way.

use crate::energy::calculate_energy;
use crate::error::CarveError;
use crate::greedy::GreedyScan;
use crate::seamfinder::SeamFinder;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use tracing::debug;

// Every index is checked against the perpendicular dimension before a
// single pixel moves; a finder bug surfaces as an error, not as a
// scrambled image.
fn check_seam(seam: &[u32], limit: u32) -> Result<(), CarveError> {
    for index in seam {
        if *index >= limit {
            return Err(CarveError::OutOfRangeAccess {
                index: *index,
                limit,
            });
        }
    }
    Ok(())
}

// Build a new image one column narrower: everything left of the seam
// copies straight across, everything right of it slides left by one,
// and the seam's own pixel is dropped.
fn remove_vertical_seam<I, P, S>(
    image: &I,
    seam: &[u32],
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if width < 2 {
        return Err(CarveError::InvalidDimensions { width: 0, height });
    }
    check_seam(seam, width)?;

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..cut {
            imgbuf.put_pixel(x, y, image.get_pixel(x, y));
        }
        for x in (cut + 1)..width {
            imgbuf.put_pixel(x - 1, y, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

fn remove_horizontal_seam<I, P, S>(
    image: &I,
    seam: &[u32],
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if height < 2 {
        return Err(CarveError::InvalidDimensions { width, height: 0 });
    }
    check_seam(seam, height)?;

    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for x in 0..width {
        let cut = seam[x as usize];
        for y in 0..cut {
            imgbuf.put_pixel(x, y, image.get_pixel(x, y));
        }
        for y in (cut + 1)..height {
            imgbuf.put_pixel(x, y - 1, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

/// Remove `count` vertical seams, choosing each with `finder`.  The
/// result is `count` columns narrower; height and channel layout are
/// untouched.  `count` must leave at least one column standing.
pub fn remove_vertical_seams_with<I, P, S, F>(
    image: &I,
    count: u32,
    finder: &F,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    F: SeamFinder,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions { width, height });
    }
    if count >= width {
        return Err(CarveError::InvalidDimensions {
            width: width.saturating_sub(count),
            height,
        });
    }

    let mut scratch = ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y));
    for n in 0..count {
        let energy = calculate_energy(&scratch)?;
        let (seam, cost) = finder.find_vertical_seam(&energy)?;
        debug!(
            "vertical seam {}/{}: cost {:.6}, width {}",
            n + 1,
            count,
            cost,
            scratch.width()
        );
        scratch = remove_vertical_seam(&scratch, &seam)?;
    }
    Ok(scratch)
}

/// Remove `count` horizontal seams, choosing each with `finder`.  The
/// result is `count` rows shorter; width and channel layout are
/// untouched.  `count` must leave at least one row standing.
pub fn remove_horizontal_seams_with<I, P, S, F>(
    image: &I,
    count: u32,
    finder: &F,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    F: SeamFinder,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions { width, height });
    }
    if count >= height {
        return Err(CarveError::InvalidDimensions {
            width,
            height: height.saturating_sub(count),
        });
    }

    let mut scratch = ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y));
    for n in 0..count {
        let energy = calculate_energy(&scratch)?;
        let (seam, cost) = finder.find_horizontal_seam(&energy)?;
        debug!(
            "horizontal seam {}/{}: cost {:.6}, height {}",
            n + 1,
            count,
            cost,
            scratch.height()
        );
        scratch = remove_horizontal_seam(&scratch, &seam)?;
    }
    Ok(scratch)
}

/// `remove_vertical_seams_with`, with the default greedy strategy.
pub fn remove_vertical_seams<I, P, S>(
    image: &I,
    count: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    remove_vertical_seams_with(image, count, &GreedyScan)
}

/// `remove_horizontal_seams_with`, with the default greedy strategy.
pub fn remove_horizontal_seams<I, P, S>(
    image: &I,
    count: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    remove_horizontal_seams_with(image, count, &GreedyScan)
}
