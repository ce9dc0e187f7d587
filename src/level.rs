/*
level.rs

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

//! Level data model and validation.
//!
//! A [`LevelModel`] object describes a puzzle: the grid of layout codes, the block type
//! definitions, the player's starting cell, and the scoring parameters.
//! The model is pure data. Before a level reaches the catalog or a session, the
//! [`LevelModel::validate`] method must pass.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum_macros::FromRepr;

/// Layout code of an empty, untraversable cell.
pub const EMPTY_CELL: u8 = 0;

/// Block behavior kind.
///
/// The discriminants are the layout codes that the built-in levels and the random level
/// generator use for each kind.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum BlockKind {
    Normal = 1,
    Special = 2,
    Goal = 3,
}

impl BlockKind {
    /// Points awarded the first time the player lands on a block of this kind.
    pub fn default_points(self) -> u32 {
        match self {
            BlockKind::Normal => 10,
            BlockKind::Special => 25,
            BlockKind::Goal => 50,
        }
    }
}

/// Definition of a block type.
///
/// The texture keys are opaque to the core: only the renderer gives them a meaning.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BlockTypeDef {
    /// Block behavior kind.
    pub kind: BlockKind,

    /// Points awarded on the first visit.
    pub points: u32,

    /// Texture key before the block is transformed.
    pub texture_key: String,

    /// Texture key after the block is transformed.
    pub transformed_texture_key: String,
}

impl BlockTypeDef {
    /// Return the standard definition for the given kind.
    pub fn common(kind: BlockKind) -> Self {
        let (texture_key, transformed_texture_key) = match kind {
            BlockKind::Normal => ("block_yellow", "block_pink"),
            BlockKind::Special => ("block_special", "block_special_active"),
            BlockKind::Goal => ("block_goal", "block_goal_active"),
        };
        Self {
            kind,
            points: kind.default_points(),
            texture_key: String::from(texture_key),
            transformed_texture_key: String::from(transformed_texture_key),
        }
    }
}

/// Return the standard block type table, indexed by layout code.
pub fn common_block_types() -> HashMap<u8, BlockTypeDef> {
    (BlockKind::Normal as u8..=BlockKind::Goal as u8)
        .filter_map(|code| BlockKind::from_repr(code).map(|kind| (code, BlockTypeDef::common(kind))))
        .collect()
}

/// Type of errors for invalid level definitions.
#[derive(Debug, PartialEq, Eq)]
pub enum LevelError {
    /// The layout grid has no cells.
    EmptyLayout,

    /// The given row does not have the same length as the first row.
    RaggedRow(usize),

    /// The start position is outside the grid.
    StartOutOfBounds,

    /// The start position is on an empty cell.
    StartOnEmptyCell,

    /// The given layout code has no entry in the block type table.
    UndefinedLayoutCode(u8),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelError::EmptyLayout => write!(f, "the layout grid is empty"),
            LevelError::RaggedRow(y) => {
                write!(f, "row {y} does not have the same length as the first row")
            }
            LevelError::StartOutOfBounds => write!(f, "the start position is outside the grid"),
            LevelError::StartOnEmptyCell => write!(f, "the start position is on an empty cell"),
            LevelError::UndefinedLayoutCode(code) => {
                write!(f, "the layout code {code} is not in the block type table")
            }
        }
    }
}

/// Static definition of a level.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LevelModel {
    /// Level identifier. The catalog progression follows increasing identifiers.
    pub id: u32,

    /// Display name. The name plays no role in the puzzle logic.
    pub name: String,

    /// Rectangular grid of layout codes. [`EMPTY_CELL`] marks an untraversable cell.
    pub layout: Vec<Vec<u8>>,

    /// Starting cell of the player, as `(x, y)` grid coordinates.
    pub start_position: (usize, usize),

    /// Block type definitions, indexed by layout code.
    pub block_types: HashMap<u8, BlockTypeDef>,

    /// Minimum score to permit a win. When absent, 70% of the total points is required.
    pub required_score: Option<u32>,

    /// Advisory time limit in seconds. The core exposes the value but does not enforce it.
    pub time_limit: Option<u32>,
}

impl LevelModel {
    /// Return the width of the layout grid.
    pub fn width(&self) -> usize {
        self.layout.first().map_or(0, |row| row.len())
    }

    /// Return the height of the layout grid.
    pub fn height(&self) -> usize {
        self.layout.len()
    }

    /// Return the layout code of the given cell, or None if the cell is outside the grid.
    pub fn code_at(&self, x: usize, y: usize) -> Option<u8> {
        self.layout.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Return the block type of the given cell, or None if the cell is empty or outside
    /// the grid.
    pub fn block_type_at(&self, x: usize, y: usize) -> Option<&BlockTypeDef> {
        match self.code_at(x, y) {
            Some(code) if code != EMPTY_CELL => self.block_types.get(&code),
            _ => None,
        }
    }

    /// Verify the level definition.
    ///
    /// The checks run in order and stop at the first failure: the grid must be non-empty
    /// and rectangular, the start position must be inside the grid and on a non-empty cell,
    /// and every non-zero layout code must have an entry in the block type table.
    ///
    /// # Errors
    ///
    /// The method returns the first failed check as a [`LevelError`].
    pub fn validate(&self) -> Result<(), LevelError> {
        let width: usize = self.width();
        if width == 0 {
            return Err(LevelError::EmptyLayout);
        }
        for (y, row) in self.layout.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::RaggedRow(y));
            }
        }

        let (x, y) = self.start_position;
        if x >= width || y >= self.height() {
            return Err(LevelError::StartOutOfBounds);
        }
        if self.layout[y][x] == EMPTY_CELL {
            return Err(LevelError::StartOnEmptyCell);
        }

        for row in &self.layout {
            for code in row {
                if *code != EMPTY_CELL && !self.block_types.contains_key(code) {
                    return Err(LevelError::UndefinedLayoutCode(*code));
                }
            }
        }
        Ok(())
    }

    /// Return the sum of the points of every non-empty cell.
    ///
    /// Layout codes without a block type definition count for zero. The validator rejects
    /// such levels before they are played.
    pub fn max_score(&self) -> u32 {
        self.layout
            .iter()
            .flatten()
            .filter(|code| **code != EMPTY_CELL)
            .filter_map(|code| self.block_types.get(code))
            .map(|def| def.points)
            .sum()
    }

    /// Return the score required to win: the explicit [`LevelModel::required_score`] value,
    /// or 70% (floored) of the total points when the level does not set one.
    pub fn win_score(&self) -> u32 {
        match self.required_score {
            Some(score) => score,
            None => self.max_score() * 7 / 10,
        }
    }
}
