// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Retargeting: carve toward the target aspect ratio, then resize.
//!
//! Seam removal changes the aspect ratio while preserving salient
//! content; the final uniform resize only corrects residual scale.
//! Which direction to carve falls out of comparing the source and
//! target aspect ratios, by integer cross-multiplication so that an
//! exactly matching aspect skips carving entirely.

use crate::carver::{remove_horizontal_seams_with, remove_vertical_seams_with};
use crate::error::CarveError;
use crate::greedy::GreedyScan;
use crate::seamfinder::SeamFinder;
use crate::transform;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use tracing::debug;

/// Retarget `image` to exactly `new_width` x `new_height`, choosing
/// each seam with `finder`.
pub fn retarget_with<I, P, S, F>(
    image: &I,
    new_width: u32,
    new_height: u32,
    finder: &F,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P> + 'static,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    F: SeamFinder,
{
    let (cols, rows) = image.dimensions();
    if cols == 0 || rows == 0 {
        return Err(CarveError::InvalidDimensions {
            width: cols,
            height: rows,
        });
    }
    if new_width == 0 || new_height == 0 {
        return Err(CarveError::InvalidDimensions {
            width: new_width,
            height: new_height,
        });
    }

    // current aspect is cols/rows, target is new_width/new_height;
    // compare as u64 cross-products to dodge float equality.
    let current = u64::from(cols) * u64::from(new_height);
    let target = u64::from(rows) * u64::from(new_width);

    if target > current {
        // Relatively wider: carve rows away until the aspect matches.
        let target_aspect = f64::from(new_width) / f64::from(new_height);
        let count = rows - (f64::from(cols) / target_aspect).floor() as u32;
        debug!("retarget {}x{} -> {}x{}: {} horizontal seams", cols, rows, new_width, new_height, count);
        let carved = remove_horizontal_seams_with(image, count, finder)?;
        transform::resize(&carved, new_width, new_height)
    } else if target < current {
        // Relatively taller: carve columns away.
        let target_aspect = f64::from(new_width) / f64::from(new_height);
        let count = cols - (f64::from(rows) * target_aspect).floor() as u32;
        debug!("retarget {}x{} -> {}x{}: {} vertical seams", cols, rows, new_width, new_height, count);
        let carved = remove_vertical_seams_with(image, count, finder)?;
        transform::resize(&carved, new_width, new_height)
    } else {
        // Aspect already matches; a plain resize is all that's left.
        debug!("retarget {}x{} -> {}x{}: aspect unchanged", cols, rows, new_width, new_height);
        transform::resize(image, new_width, new_height)
    }
}

/// `retarget_with`, with the default greedy strategy.
pub fn retarget<I, P, S>(
    image: &I,
    new_width: u32,
    new_height: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P> + 'static,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    retarget_with(image, new_width, new_height, &GreedyScan)
}
