/*
random_level.rs

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

//! Generate a random level.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::difficulty::DifficultyParams;
use super::path::GuaranteedPath;
use crate::level::{BlockKind, EMPTY_CELL, LevelError, LevelModel, common_block_types};

// Time limit curve: start at two minutes and remove five seconds per level, with a
// one-minute floor.
const TIME_LIMIT_START_SEC: u32 = 120;
const TIME_LIMIT_STEP_SEC: u32 = 5;
const TIME_LIMIT_MIN_SEC: u32 = 60;

/// [`RandomLevel`] object.
pub struct RandomLevel<R: Rng> {
    /// Guaranteed path of the last generated level.
    pub path: GuaranteedPath,

    /// Injected random source.
    rng: R,
}

impl RandomLevel<StdRng> {
    /// Create a generator with a seeded random source, for reproducible levels.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomLevel<R> {
    /// Create the object with the given random source.
    pub fn new(rng: R) -> Self {
        Self {
            path: GuaranteedPath::default(),
            rng,
        }
    }

    /// Generate and return a level for the given progression number.
    ///
    /// The guaranteed path of the level is kept in [`RandomLevel::path`] until the next
    /// generation.
    ///
    /// # Errors
    ///
    /// The method validates the level before returning it. A validation failure is a bug
    /// in the generator, not a condition the caller can provoke.
    pub fn generate(&mut self, number: u32) -> Result<LevelModel, LevelError> {
        let params: DifficultyParams = DifficultyParams::for_level(number);
        let size: usize = self.rng.random_range(params.min_size..=params.max_size);
        debug!("Level {number}: size = {size}  params = {params:?}");

        // Start from a full grid of normal blocks.
        let mut layout: Vec<Vec<u8>> = vec![vec![BlockKind::Normal as u8; size]; size];

        self.carve_gaps(&mut layout, &params);
        self.promote_specials(&mut layout, &params);

        // Force the guaranteed path back onto solid ground. The path is computed once and
        // also provides the start and goal cells, so it always matches the carved grid.
        self.path = GuaranteedPath::synthesize(&mut self.rng, size);
        for (x, y) in self.path.get() {
            if layout[*y][*x] == EMPTY_CELL {
                layout[*y][*x] = BlockKind::Normal as u8;
            }
        }

        let (goal_x, goal_y) = self.path.last().ok_or(LevelError::EmptyLayout)?;
        layout[goal_y][goal_x] = BlockKind::Goal as u8;
        let start_position: (usize, usize) = self.path.first().ok_or(LevelError::EmptyLayout)?;
        debug!("Level {number}: start = {start_position:?}  goal = ({goal_x}, {goal_y})");

        let mut level: LevelModel = LevelModel {
            id: number,
            name: format!("Level {number}"),
            layout,
            start_position,
            block_types: common_block_types(),
            required_score: None,
            time_limit: Some(
                TIME_LIMIT_START_SEC
                    .saturating_sub(number.saturating_mul(TIME_LIMIT_STEP_SEC))
                    .max(TIME_LIMIT_MIN_SEC),
            ),
        };

        // Require 70% of the total points.
        level.required_score = Some(level.max_score() * 7 / 10);

        level.validate()?;
        Ok(level)
    }

    /// Carve random runs of empty cells, row by row.
    ///
    /// The sweep skips the cells of a carved run so that a run is never extended by a
    /// second draw on its own cells.
    fn carve_gaps(&mut self, layout: &mut [Vec<u8>], params: &DifficultyParams) {
        let size: usize = layout.len();
        for row in layout.iter_mut() {
            let mut x: usize = 0;
            while x < size {
                if self.rng.random_bool(params.gap_chance) {
                    let run: usize = self.rng.random_range(1..=params.max_gap_run);
                    let end: usize = (x + run).min(size);
                    for cell in &mut row[x..end] {
                        *cell = EMPTY_CELL;
                    }
                    x = end;
                } else {
                    x += 1;
                }
            }
        }
    }

    /// Promote remaining normal blocks to special blocks.
    fn promote_specials(&mut self, layout: &mut [Vec<u8>], params: &DifficultyParams) {
        for row in layout.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == BlockKind::Normal as u8 && self.rng.random_bool(params.special_chance) {
                    *cell = BlockKind::Special as u8;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::difficulty::DifficultyParams;

    #[test]
    fn generated_levels_pass_validation() {
        for seed in 0..20 {
            let mut generator: RandomLevel<StdRng> = RandomLevel::from_seed(seed);
            for number in [1, 5, 12, 40] {
                let level: LevelModel = generator.generate(number).unwrap();
                assert_eq!(level.validate(), Ok(()));
                assert_eq!(level.id, number);
            }
        }
    }

    #[test]
    fn guaranteed_path_is_walkable_from_start_to_goal() {
        for seed in 0..20 {
            let mut generator: RandomLevel<StdRng> = RandomLevel::from_seed(seed);
            let level: LevelModel = generator.generate(6).unwrap();
            let path = generator.path.clone();

            assert_eq!(path.first(), Some(level.start_position));
            for (x, y) in path.get() {
                assert_ne!(level.code_at(*x, *y), Some(EMPTY_CELL));
            }
            let (goal_x, goal_y) = path.last().unwrap();
            assert_eq!(level.code_at(goal_x, goal_y), Some(BlockKind::Goal as u8));
        }
    }

    #[test]
    fn grid_size_stays_within_the_difficulty_bounds() {
        let mut generator: RandomLevel<StdRng> = RandomLevel::from_seed(99);
        for number in [1, 3, 9, 30] {
            let params: DifficultyParams = DifficultyParams::for_level(number);
            let level: LevelModel = generator.generate(number).unwrap();
            assert_eq!(level.width(), level.height());
            assert!(level.width() >= params.min_size);
            assert!(level.width() <= params.max_size);
        }
    }

    #[test]
    fn required_score_is_seventy_percent_of_the_total() {
        let mut generator: RandomLevel<StdRng> = RandomLevel::from_seed(4);
        let level: LevelModel = generator.generate(2).unwrap();
        assert_eq!(level.required_score, Some(level.max_score() * 7 / 10));
    }

    #[test]
    fn time_limit_decreases_and_stops_at_the_floor() {
        let mut generator: RandomLevel<StdRng> = RandomLevel::from_seed(5);
        assert_eq!(generator.generate(1).unwrap().time_limit, Some(115));
        assert_eq!(generator.generate(10).unwrap().time_limit, Some(70));
        assert_eq!(generator.generate(13).unwrap().time_limit, Some(60));
        assert_eq!(generator.generate(1000).unwrap().time_limit, Some(60));
    }

    #[test]
    fn same_seed_gives_the_same_level() {
        let level1: LevelModel = RandomLevel::from_seed(42).generate(3).unwrap();
        let level2: LevelModel = RandomLevel::from_seed(42).generate(3).unwrap();
        assert_eq!(level1.layout, level2.layout);
        assert_eq!(level1.start_position, level2.start_position);
        assert_eq!(level1.required_score, level2.required_score);
    }
}
