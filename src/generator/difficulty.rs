/*
difficulty.rs

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

//! Difficulty curve for the random level generator.

/// Generation parameters for a progression number.
///
/// Every parameter grows monotonically with the progression number and is clamped to
/// its maximum, so very high numbers produce stable parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    /// Smallest grid side.
    pub min_size: usize,

    /// Largest grid side.
    pub max_size: usize,

    /// Probability to promote a normal block to a special block.
    pub special_chance: f64,

    /// Probability to carve a gap run at a cell.
    pub gap_chance: f64,

    /// Longest contiguous gap run.
    pub max_gap_run: usize,
}

impl DifficultyParams {
    /// Compute the parameters for the given progression number.
    pub fn for_level(number: u32) -> Self {
        let n: usize = number as usize;
        Self {
            min_size: (4 + n / 3).min(8),
            max_size: (5 + n / 2).min(10),
            special_chance: (0.1 + f64::from(number) * 0.05).min(0.4),
            gap_chance: (0.1 + f64::from(number) * 0.03).min(0.3),
            max_gap_run: (1 + n / 5).min(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_level_parameters() {
        let params: DifficultyParams = DifficultyParams::for_level(1);
        assert_eq!(params.min_size, 4);
        assert_eq!(params.max_size, 5);
        assert_eq!(params.max_gap_run, 1);
        assert!((params.special_chance - 0.15).abs() < 1e-9);
        assert!((params.gap_chance - 0.13).abs() < 1e-9);
    }

    #[test]
    fn curve_is_monotonic_and_clamped() {
        let mut previous: DifficultyParams = DifficultyParams::for_level(1);
        for number in 2..100 {
            let params: DifficultyParams = DifficultyParams::for_level(number);
            assert!(params.min_size >= previous.min_size);
            assert!(params.max_size >= previous.max_size);
            assert!(params.special_chance >= previous.special_chance);
            assert!(params.gap_chance >= previous.gap_chance);
            assert!(params.max_gap_run >= previous.max_gap_run);
            assert!(params.min_size <= params.max_size);
            previous = params;
        }
        assert_eq!(previous.min_size, 8);
        assert_eq!(previous.max_size, 10);
        assert_eq!(previous.max_gap_run, 3);
        assert!((previous.special_chance - 0.4).abs() < 1e-9);
        assert!((previous.gap_chance - 0.3).abs() < 1e-9);
    }
}
