// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative-minimum seam search.
//!
//! A bottom-up table: every cell accumulates its own energy plus the
//! cheapest of the three reachable cells in the previous row (or
//! column), remembering which one it came from.  Backtracing from the
//! cheapest cell on the far edge yields the globally minimal seam,
//! unlike the pruned greedy walk, which can miss it.

use crate::cq;
use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::seamfinder::{Seam, SeamFinder};
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};

type CostTable = TwoDimensionalMap<EnergyAndBackPointer<f32>>;

/// The exact dynamic-programming strategy.  Slower per pixel than the
/// greedy walk but guaranteed minimal.
#[derive(Debug, Default)]
pub struct CumulativeTable;

impl SeamFinder for CumulativeTable {
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Result<(Seam, f32), CarveError> {
        let (width, height) = energy.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::DegenerateInput { width, height });
        }
        let mut target = CostTable::new(width, height);

        // Populate the first row with their native energies.
        for i in 0..width {
            target[(i, 0)].energy = energy[(i, 0)];
        }

        let maxwidth = width - 1;
        // For every subsequent row, populate the target cell with the
        // sum of the lowest adjacent upper energy and the x coordinate
        // of that energy.
        for y in 1..height {
            for x in 0..width {
                let erg = energy[(x, y)];
                let mut parent_x = cq!(x == 0, 0, x - 1);
                for candidate in parent_x..=cq!(x == maxwidth, maxwidth, x + 1) {
                    if target[(candidate, y - 1)].energy < target[(parent_x, y - 1)].energy {
                        parent_x = candidate;
                    }
                }
                let parent = target[(parent_x, y - 1)];
                target[(x, y)] = EnergyAndBackPointer {
                    energy: erg + parent.energy,
                    parent: parent_x,
                };
            }
        }

        // Find the x coordinate of the bottommost cell with the least
        // accumulated energy.
        let mut seam_col = 0;
        for x in 0..width {
            if target[(x, height - 1)].energy < target[(seam_col, height - 1)].energy {
                seam_col = x;
            }
        }
        let total = target[(seam_col, height - 1)].energy;

        // Working backwards, generate a vec of x coordinates that map
        // to the seam, reverse and return.
        let seam = (0..height)
            .rev()
            .fold(Vec::with_capacity(height as usize), |mut acc, y| {
                acc.push(seam_col);
                seam_col = target[(seam_col, y)].parent;
                acc
            })
            .into_iter()
            .rev()
            .collect();
        Ok((seam, total))
    }

    fn find_horizontal_seam(&self, energy: &EnergyMap) -> Result<(Seam, f32), CarveError> {
        let (width, height) = energy.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::DegenerateInput { width, height });
        }
        let mut target = CostTable::new(width, height);

        // Populate the first column with their native energies.
        for i in 0..height {
            target[(0, i)].energy = energy[(0, i)];
        }

        let maxheight = height - 1;
        // For every subsequent column, populate the target cell with
        // the sum of the lowest adjacent leftward energy and the y
        // coordinate of that energy.
        for x in 1..width {
            for y in 0..height {
                let erg = energy[(x, y)];
                let mut parent_y = cq!(y == 0, 0, y - 1);
                for candidate in parent_y..=cq!(y == maxheight, maxheight, y + 1) {
                    if target[(x - 1, candidate)].energy < target[(x - 1, parent_y)].energy {
                        parent_y = candidate;
                    }
                }
                let parent = target[(x - 1, parent_y)];
                target[(x, y)] = EnergyAndBackPointer {
                    energy: erg + parent.energy,
                    parent: parent_y,
                };
            }
        }

        // Find the y coordinate of the rightmost cell with the least
        // accumulated energy.
        let mut seam_row = 0;
        for y in 0..height {
            if target[(width - 1, y)].energy < target[(width - 1, seam_row)].energy {
                seam_row = y;
            }
        }
        let total = target[(width - 1, seam_row)].energy;

        // Working backwards, generate a vec of y coordinates that map
        // to the seam, reverse and return.
        let seam = (0..width)
            .rev()
            .fold(Vec::with_capacity(width as usize), |mut acc, x| {
                acc.push(seam_row);
                seam_row = target[(x, seam_row)].parent;
                acc
            })
            .into_iter()
            .rev()
            .collect();
        Ok((seam, total))
    }
}
