/*
the_challenge.rs

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

//! Level 3: a larger grid with many special blocks and a time limit.

use crate::level::{LevelModel, common_block_types};

/// Return the level definition.
pub fn get() -> LevelModel {
    LevelModel {
        id: 3,
        name: String::from("The Challenge"),
        layout: vec![
            vec![0, 1, 1, 2, 0],
            vec![1, 2, 1, 1, 1],
            vec![1, 1, 2, 1, 1],
            vec![1, 2, 1, 2, 1],
            vec![0, 1, 1, 1, 3],
        ],
        start_position: (2, 2),
        block_types: common_block_types(),
        required_score: Some(250),
        time_limit: Some(60),
    }
}
