// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field.
//!
//! Holds whatever the carving passes need at each pixel address: a
//! bare `f32` for the energy map, or an energy plus a parent address
//! for the cumulative-cost table.

use std::ops::{Index, IndexMut};

#[derive(Debug)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A new map of the given dimensions, every cell defaulted.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  The vector's length must
    /// equal `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Self {
        assert_eq!(data.len(), width as usize * height as usize);
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height), in that order, matching image.rs.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// One cell of the cumulative-cost table: the cost of the best path
/// reaching this cell, and the perpendicular coordinate of the cell it
/// came from.
#[derive(Default, Debug, Copy, Clone)]
pub struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let map = TwoDimensionalMap::from_raw(3, 2, vec![0u32, 1, 2, 3, 4, 5]);
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map[(2, 1)], 5);
    }

    #[test]
    fn cells_are_writable() {
        let mut map: TwoDimensionalMap<f32> = TwoDimensionalMap::new(2, 2);
        map[(1, 1)] = 7.5;
        assert_eq!(map[(1, 1)], 7.5);
        assert_eq!(map[(0, 0)], 0.0);
    }

    #[test]
    #[should_panic]
    fn from_raw_rejects_short_vectors() {
        TwoDimensionalMap::from_raw(3, 2, vec![0u32; 5]);
    }
}
