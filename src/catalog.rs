/*
catalog.rs

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

//! Ordered registry of levels with linear progression.
//!
//! The catalog holds [`LevelModel`] objects indexed by identifier and tracks a single
//! progression cursor. Advancing requires the immediate successor identifier to exist;
//! running past the last level is a normal end-of-content condition, not an error.

// For developers: add your new level to this list of modules.
pub mod first_steps;
pub mod special_blocks;
pub mod the_challenge;

use log::debug;
use std::collections::HashMap;

use crate::level::{LevelError, LevelModel};

/// Level registry and progression cursor.
#[derive(Debug)]
pub struct LevelCatalog {
    /// Registered levels, indexed by identifier.
    levels: HashMap<u32, LevelModel>,

    /// Identifier of the current level.
    cursor: u32,

    /// Identifier the cursor returns to on [`LevelCatalog::reset`].
    initial: u32,
}

impl LevelCatalog {
    /// Create an empty catalog with the given initial cursor.
    pub fn new(initial: u32) -> Self {
        Self {
            levels: HashMap::new(),
            cursor: initial,
            initial,
        }
    }

    /// Create a catalog pre-loaded with the built-in levels.
    pub fn builtin() -> Self {
        let mut catalog: LevelCatalog = Self::new(1);

        // For developers: add your new level to the list.
        for level in [first_steps::get(), special_blocks::get(), the_challenge::get()] {
            if let Err(e) = catalog.add(level) {
                panic!("Invalid built-in level: {e}");
            }
        }
        catalog
    }

    /// Register a level, replacing any level with the same identifier.
    ///
    /// # Errors
    ///
    /// The method refuses levels that do not pass validation.
    pub fn add(&mut self, level: LevelModel) -> Result<(), LevelError> {
        level.validate()?;
        debug!("Registering level {} ({})", level.id, level.name);
        self.levels.insert(level.id, level);
        Ok(())
    }

    /// Return the level with the given identifier.
    pub fn get(&self, id: u32) -> Option<&LevelModel> {
        self.levels.get(&id)
    }

    /// Return the level at the progression cursor.
    pub fn current(&self) -> Option<&LevelModel> {
        self.get(self.cursor)
    }

    /// Move the cursor to the next level and return it.
    ///
    /// When there is no next level, the cursor does not move and the method returns None.
    pub fn advance(&mut self) -> Option<&LevelModel> {
        if self.levels.contains_key(&(self.cursor + 1)) {
            self.cursor += 1;
            self.current()
        } else {
            debug!("No level after {}", self.cursor);
            None
        }
    }

    /// Return the cursor to the initial level.
    pub fn reset(&mut self) {
        self.cursor = self.initial;
    }

    /// Whether the current level is the last one.
    pub fn is_last(&self) -> bool {
        !self.levels.contains_key(&(self.cursor + 1))
    }

    /// Return the number of registered levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the catalog has no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Return the registered identifiers in increasing order.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.levels.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_are_valid_and_ordered() {
        let catalog: LevelCatalog = LevelCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.ids(), vec![1, 2, 3]);
        assert_eq!(catalog.current().map(|l| l.id), Some(1));
    }

    #[test]
    fn advance_stops_at_the_last_level() {
        let mut catalog: LevelCatalog = LevelCatalog::new(1);
        catalog.add(first_steps::get()).unwrap();
        catalog.add(special_blocks::get()).unwrap();

        assert!(!catalog.is_last());
        assert_eq!(catalog.advance().map(|l| l.id), Some(2));
        assert!(catalog.is_last());

        // No level 3: the cursor must not move.
        assert!(catalog.advance().is_none());
        assert_eq!(catalog.current().map(|l| l.id), Some(2));
    }

    #[test]
    fn reset_returns_to_the_initial_level() {
        let mut catalog: LevelCatalog = LevelCatalog::builtin();
        catalog.advance();
        catalog.advance();
        catalog.reset();
        assert_eq!(catalog.current().map(|l| l.id), Some(1));
    }

    #[test]
    fn add_rejects_invalid_levels() {
        let mut catalog: LevelCatalog = LevelCatalog::new(1);
        let mut level = first_steps::get();
        level.start_position = (3, 0);
        assert!(catalog.add(level).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_level_is_not_an_error() {
        let catalog: LevelCatalog = LevelCatalog::builtin();
        assert!(catalog.get(42).is_none());
    }
}
