// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The greedy local seam search.
//!
//! Every possible starting position gets its own walk across the map:
//! at each step the walk moves to whichever of the three reachable
//! neighbors holds the least energy, ties favoring staying put, then
//! the inside (lower-coordinate) neighbor.  A walk is abandoned as
//! soon as its running total exceeds the best completed total, which
//! prunes the search without making it exact: a pruned walk might
//! still have won with a different continuation.  The cheapest
//! surviving walk wins.
//!
//! Both lateral neighbors are admitted everywhere except the map
//! edges themselves (`index > 0`, `index < dim - 1`), so a seam can
//! hug either border.

use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::seamfinder::{Seam, SeamFinder};

/// The greedy per-start walker.  The default strategy of the removal
/// loops.
#[derive(Debug, Default)]
pub struct GreedyScan;

impl SeamFinder for GreedyScan {
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Result<(Seam, f32), CarveError> {
        let (cols, rows) = energy.dimensions();
        if cols == 0 || rows == 0 {
            return Err(CarveError::DegenerateInput {
                width: cols,
                height: rows,
            });
        }

        let mut best_seam = vec![0u32; rows as usize];
        let mut best_total = std::f32::INFINITY;
        let mut current = vec![0u32; rows as usize];

        for start in 0..cols {
            current[0] = start;
            let mut total = energy[(start, 0)];
            let mut pruned = false;
            for y in 1..rows {
                let index = current[(y - 1) as usize];
                let mut chosen = index;
                let mut cost = energy[(index, y)];
                if index > 0 && energy[(index - 1, y)] < cost {
                    chosen = index - 1;
                    cost = energy[(index - 1, y)];
                }
                if index < cols - 1 && energy[(index + 1, y)] < cost {
                    chosen = index + 1;
                    cost = energy[(index + 1, y)];
                }
                current[y as usize] = chosen;
                total += cost;
                if total > best_total {
                    pruned = true;
                    break;
                }
            }
            if !pruned && total < best_total {
                best_seam.copy_from_slice(&current);
                best_total = total;
            }
        }

        Ok((best_seam, best_total))
    }

    fn find_horizontal_seam(&self, energy: &EnergyMap) -> Result<(Seam, f32), CarveError> {
        let (cols, rows) = energy.dimensions();
        if cols == 0 || rows == 0 {
            return Err(CarveError::DegenerateInput {
                width: cols,
                height: rows,
            });
        }

        let mut best_seam = vec![0u32; cols as usize];
        let mut best_total = std::f32::INFINITY;
        let mut current = vec![0u32; cols as usize];

        for start in 0..rows {
            current[0] = start;
            let mut total = energy[(0, start)];
            let mut pruned = false;
            for x in 1..cols {
                let index = current[(x - 1) as usize];
                let mut chosen = index;
                let mut cost = energy[(x, index)];
                if index > 0 && energy[(x, index - 1)] < cost {
                    chosen = index - 1;
                    cost = energy[(x, index - 1)];
                }
                if index < rows - 1 && energy[(x, index + 1)] < cost {
                    chosen = index + 1;
                    cost = energy[(x, index + 1)];
                }
                current[x as usize] = chosen;
                total += cost;
                if total > best_total {
                    pruned = true;
                    break;
                }
            }
            if !pruned && total < best_total {
                best_seam.copy_from_slice(&current);
                best_total = total;
            }
        }

        Ok((best_seam, best_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(width: u32, height: u32, data: &[f32]) -> EnergyMap {
        EnergyMap::from_raw(width, height, data.to_vec())
    }

    fn column_well(width: u32, height: u32, well: u32) -> EnergyMap {
        let mut data = Vec::with_capacity((width * height) as usize);
        for _y in 0..height {
            for x in 0..width {
                data.push(if x == well { 0.0 } else { 1.0 });
            }
        }
        EnergyMap::from_raw(width, height, data)
    }

    #[test]
    fn follows_a_zero_energy_column() {
        let energy = column_well(8, 8, 3);
        let (seam, total) = GreedyScan.find_vertical_seam(&energy).unwrap();
        assert_eq!(seam, vec![3; 8]);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn follows_a_zero_energy_row() {
        let mut data = vec![1.0f32; 64];
        for x in 0..8 {
            data[3 * 8 + x] = 0.0;
        }
        let energy = map(8, 8, &data);
        let (seam, total) = GreedyScan.find_horizontal_seam(&energy).unwrap();
        assert_eq!(seam, vec![3; 8]);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn walks_can_reach_the_left_edge() {
        // The cheap path starts in column 1 and steps down-left to
        // column 0; admitting the left neighbor all the way to the
        // edge is what makes it findable.
        let energy = map(2, 2, &[5.0, 0.0, 0.0, 5.0]);
        let (seam, total) = GreedyScan.find_vertical_seam(&energy).unwrap();
        assert_eq!(seam, vec![1, 0]);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn later_start_can_beat_earlier_ones() {
        let energy = column_well(5, 4, 4);
        let (seam, total) = GreedyScan.find_vertical_seam(&energy).unwrap();
        assert_eq!(seam, vec![4; 4]);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn ties_prefer_staying_put() {
        let energy = map(3, 2, &[1.0; 6]);
        let (seam, total) = GreedyScan.find_vertical_seam(&energy).unwrap();
        assert_eq!(seam, vec![0, 0]);
        assert_eq!(total, 2.0);
    }

    #[test]
    fn single_row_returns_cheapest_start() {
        let energy = map(4, 1, &[3.0, 1.0, 2.0, 5.0]);
        let (seam, total) = GreedyScan.find_vertical_seam(&energy).unwrap();
        assert_eq!(seam, vec![1]);
        assert_eq!(total, 1.0);
    }

    #[test]
    fn single_column_is_the_only_path() {
        let energy = map(1, 3, &[2.0, 3.0, 4.0]);
        let (seam, total) = GreedyScan.find_vertical_seam(&energy).unwrap();
        assert_eq!(seam, vec![0, 0, 0]);
        assert_eq!(total, 9.0);
    }

    #[test]
    fn seam_steps_stay_connected() {
        let energy = map(
            5,
            4,
            &[
                9.0, 9.0, 0.0, 9.0, 9.0, //
                9.0, 1.0, 9.0, 8.0, 9.0, //
                9.0, 9.0, 9.0, 9.0, 0.0, //
                9.0, 9.0, 9.0, 0.0, 9.0, //
            ],
        );
        let (seam, _) = GreedyScan.find_vertical_seam(&energy).unwrap();
        assert_eq!(seam.len(), 4);
        for pair in seam.windows(2) {
            let step = (i64::from(pair[0]) - i64::from(pair[1])).abs();
            assert!(step <= 1, "seam {:?} is disconnected", seam);
        }
    }

    #[test]
    fn empty_map_is_degenerate() {
        let energy = EnergyMap::from_raw(0, 0, vec![]);
        assert_eq!(
            GreedyScan.find_vertical_seam(&energy).unwrap_err(),
            CarveError::DegenerateInput {
                width: 0,
                height: 0
            }
        );
        assert_eq!(
            GreedyScan.find_horizontal_seam(&energy).unwrap_err(),
            CarveError::DegenerateInput {
                width: 0,
                height: 0
            }
        );
    }
}
