// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image retargeting.
//!
//! Shrink an image toward a new aspect ratio by repeatedly removing
//! its least-important seam, then resize uniformly to the exact
//! requested dimensions.  Works on anything implementing the image.rs
//! `GenericImageView` trait.

// #![deny(missing_docs)]

pub mod ternary;

pub mod twodmap;

pub mod error;
pub use crate::error::CarveError;

pub mod transform;
pub use crate::transform::{shift, Border};

pub mod energy;
pub use crate::energy::{
    calculate_energy, calculate_horizontal_seam, calculate_vertical_seam, energy_to_image,
    EnergyMap,
};

pub mod seamfinder;
pub use crate::seamfinder::{Seam, SeamFinder};

pub mod greedy;
pub use crate::greedy::GreedyScan;

pub mod cumulative;
pub use crate::cumulative::CumulativeTable;

pub mod carver;
pub use crate::carver::{
    remove_horizontal_seams, remove_horizontal_seams_with, remove_vertical_seams,
    remove_vertical_seams_with,
};

pub mod retarget;
pub use crate::retarget::{retarget, retarget_with};
