/*
first_steps.rs

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

//! Level 1: tutorial level with a simple path to the goal.

use std::collections::HashMap;

use crate::level::{BlockKind, BlockTypeDef, LevelModel};

/// Return the level definition.
pub fn get() -> LevelModel {
    LevelModel {
        id: 1,
        name: String::from("First Steps"),
        layout: vec![
            vec![1, 1, 1, 0],
            vec![1, 1, 1, 1],
            vec![1, 1, 0, 1],
            vec![0, 1, 1, 3],
        ],
        start_position: (1, 1),
        block_types: HashMap::from([
            (1, BlockTypeDef::common(BlockKind::Normal)),
            (3, BlockTypeDef::common(BlockKind::Goal)),
        ]),
        required_score: None,
        time_limit: None,
    }
}
