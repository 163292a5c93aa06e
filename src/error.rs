// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Failures the carving pipeline can surface.
//!
//! Every variant is detected before any pixel buffer is mutated, so a
//! failed call leaves the caller's image untouched.  Carving is
//! deterministic; a failing call will fail identically on retry, and
//! the input has to be corrected instead.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// A zero-sized image, or a removal count that would shrink a
    /// dimension to zero or below.  The reported dimensions are the
    /// ones the operation would have produced.
    #[fail(display = "invalid image dimensions {}x{}", width, height)]
    InvalidDimensions { width: u32, height: u32 },

    /// A seam index landed outside the perpendicular dimension.
    #[fail(display = "seam index {} outside [0, {})", index, limit)]
    OutOfRangeAccess { index: u32, limit: u32 },

    /// An energy map too small to hold any path at all.
    #[fail(display = "energy map {}x{} admits no seam", width, height)]
    DegenerateInput { width: u32, height: u32 },
}
