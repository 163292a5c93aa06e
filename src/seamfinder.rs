// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::energy::EnergyMap;
use crate::error::CarveError;

/// An ordered list of perpendicular coordinates, one per row for a
/// vertical seam or one per column for a horizontal one.  Adjacent
/// entries differ by at most one, so the seam is a connected path from
/// one edge of the image to the other.
pub type Seam = Vec<u32>;

/// How a seam gets chosen from an energy map.  A primitive interface,
/// just enough to make room for more than one search strategy.
///
/// Implementations return the seam together with the total energy of
/// the path actually returned: the literal sum of every map value the
/// seam visits, starting cell included.
pub trait SeamFinder {
    /// The lowest-cost top-to-bottom seam the strategy can find.  The
    /// seam's length equals the map's height.
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Result<(Seam, f32), CarveError>;

    /// The lowest-cost left-to-right seam the strategy can find.  The
    /// seam's length equals the map's width.
    fn find_horizontal_seam(&self, energy: &EnergyMap) -> Result<(Seam, f32), CarveError>;
}
