/*
generator.rs

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

//! Generate random, difficulty-scaled levels.
//!
//! A [`random_level::RandomLevel`] object produces a [`crate::level::LevelModel`] for a
//! given progression number. The grid grows and the gap and special-block probabilities
//! increase with the progression number, following the curve in
//! [`difficulty::DifficultyParams`].
//!
//! Every generated level is solvable: a [`path::GuaranteedPath`] is synthesized between a
//! random start cell and a random end cell, the cells along the path are forced back to
//! normal blocks where a gap was carved, and the end of the path receives the goal block.
//! The same path provides the player's starting cell, so the carved grid and the start
//! position can never disagree.
//!
//! The random source is injected, so tests can use a seeded generator to get
//! reproducible levels.

pub mod difficulty;
pub mod path;
pub mod random_level;
