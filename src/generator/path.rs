/*
path.rs

Copyright 2025 Hervé Quatremain

This file is part of Isoblocks.

Isoblocks is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Isoblocks is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Isoblocks. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Guaranteed traversable path across the level grid.

use rand::Rng;

/// Sequence of connected cells from the player's start cell to the goal cell.
///
/// Consecutive cells differ by at most one step along each axis, so the path is made of
/// diagonal, horizontal, and vertical moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuaranteedPath {
    /// Path as an ordered list of `(x, y)` cells.
    cells: Vec<(usize, usize)>,
}

impl GuaranteedPath {
    /// Synthesize a path across a square grid of the given size.
    ///
    /// The start cell is picked in the upper-left half of the grid and the end cell in the
    /// lower-right half. Each step moves diagonally while both coordinates differ from the
    /// end cell, and along the remaining axis otherwise. When the start and end cells
    /// collapse to the same cell, the path is that single cell.
    pub fn synthesize(rng: &mut impl Rng, size: usize) -> Self {
        let half: usize = size / 2;
        let start: (usize, usize) = (rng.random_range(0..=half), rng.random_range(0..=half));
        let end: (usize, usize) = (rng.random_range(half..size), rng.random_range(half..size));

        let mut cells: Vec<(usize, usize)> = vec![start];
        let (mut x, mut y) = start;
        while (x, y) != end {
            if x < end.0 {
                x += 1;
            } else if x > end.0 {
                x -= 1;
            }
            if y < end.1 {
                y += 1;
            } else if y > end.1 {
                y -= 1;
            }
            cells.push((x, y));
        }
        Self { cells }
    }

    /// Return a reference to the path cells.
    pub fn get(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Return the first cell of the path.
    pub fn first(&self) -> Option<(usize, usize)> {
        self.cells.first().copied()
    }

    /// Return the last cell of the path.
    pub fn last(&self) -> Option<(usize, usize)> {
        self.cells.last().copied()
    }

    /// Return the number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
