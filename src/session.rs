/*
session.rs

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

//! Manage the state of a level in progress.
//!
//! A [`PuzzleSession`] owns all the puzzle logic for one playthrough of a level: the
//! player's cell, the per-tile transformation state, the score, and the move state
//! machine.
//!
//! A move runs in two steps. [`PuzzleSession::request_move`] validates the target cell and
//! suspends the session in the [`Phase::Resolving`] phase, which stands for the jump
//! animation played by the renderer. [`PuzzleSession::resolve_move`] completes the move:
//! the player relocates, the landing tile transforms and awards its points on the first
//! visit, and the win condition is evaluated. Callers without an animation step can call
//! both methods back to back. While a move is resolving, and after a win, new requests
//! are silently ignored, so double-moves and post-win moves cannot happen.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::level::{BlockKind, EMPTY_CELL, LevelError, LevelModel};

/// Four-directional move request.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Toward increasing `x`.
    East,

    /// Toward decreasing `x`.
    West,

    /// Toward increasing `y`.
    South,

    /// Toward decreasing `y`.
    North,
}

impl Direction {
    /// The four directions.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// Grid offset of a one-cell move in this direction.
    fn delta(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}

/// Move-acceptance state of the session.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Accepting move requests.
    #[default]
    Idle,

    /// A move is in flight; new requests are ignored until it resolves.
    Resolving,

    /// The level is complete. Terminal.
    Won,
}

/// State of a single non-empty cell.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TileState {
    /// Block behavior kind.
    pub kind: BlockKind,

    /// Points awarded on the first visit.
    pub point_value: u32,

    /// Whether the player already landed on the tile.
    pub transformed: bool,
}

/// Outcome of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The request was refused: target outside the grid or on an empty cell, or the
    /// session is not idle. An ordinary outcome, not an error.
    Rejected,

    /// The move is in flight. The renderer animates the jump from `from` to `to`, then
    /// calls [`PuzzleSession::resolve_move`].
    Accepted {
        from: (usize, usize),
        to: (usize, usize),
    },
}

/// Tile transformation notification for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileChange {
    /// Transformed cell.
    pub cell: (usize, usize),

    /// Kind of the transformed tile.
    pub kind: BlockKind,

    /// Texture key of the transformed tile.
    pub texture_key: String,

    /// Updated running score.
    pub score: u32,
}

/// Report produced when a pending move resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResolution {
    /// New cell of the player.
    pub position: (usize, usize),

    /// Transformation of the landing tile, on the first visit only.
    pub change: Option<TileChange>,

    /// Final score, when this move completed the level.
    pub completed: Option<u32>,
}

/// Manage the state of a level in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct PuzzleSession {
    /// Level being played.
    level: LevelModel,

    /// Per-cell state. None for empty cells.
    tiles: Vec<Vec<Option<TileState>>>,

    /// Current cell of the player.
    player: (usize, usize),

    /// Accumulated score.
    score: u32,

    /// Score required to win, resolved once at construction.
    required_score: u32,

    /// Move-acceptance state.
    phase: Phase,

    /// Target cell of the move in flight.
    pending: Option<(usize, usize)>,
}

impl PuzzleSession {
    /// Create a session for the given level.
    ///
    /// # Errors
    ///
    /// The method refuses levels that do not pass validation.
    pub fn new(level: LevelModel) -> Result<Self, LevelError> {
        level.validate()?;
        let tiles: Vec<Vec<Option<TileState>>> = Self::build_tiles(&level);
        let required_score: u32 = level.win_score();
        let player: (usize, usize) = level.start_position;
        debug!(
            "Session for level {} ({}): start = {player:?}  required score = {required_score}",
            level.id, level.name
        );
        Ok(Self {
            level,
            tiles,
            player,
            score: 0,
            required_score,
            phase: Phase::Idle,
            pending: None,
        })
    }

    /// Build the tile state grid from the level layout.
    fn build_tiles(level: &LevelModel) -> Vec<Vec<Option<TileState>>> {
        level
            .layout
            .iter()
            .map(|row| {
                row.iter()
                    .map(|code| {
                        if *code == EMPTY_CELL {
                            None
                        } else {
                            level.block_types.get(code).map(|def| TileState {
                                kind: def.kind,
                                point_value: def.points,
                                transformed: false,
                            })
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Restart the playthrough of the same level.
    pub fn reset(&mut self) {
        self.tiles = Self::build_tiles(&self.level);
        self.player = self.level.start_position;
        self.score = 0;
        self.phase = Phase::Idle;
        self.pending = None;
    }

    /// Return the level being played.
    pub fn level(&self) -> &LevelModel {
        &self.level
    }

    /// Return the move-acceptance state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the current cell of the player.
    pub fn player(&self) -> (usize, usize) {
        self.player
    }

    /// Return the accumulated score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Return the score required to win.
    pub fn required_score(&self) -> u32 {
        self.required_score
    }

    /// Return the advisory time limit of the level, in seconds.
    /// The session does not enforce it.
    pub fn time_limit(&self) -> Option<u32> {
        self.level.time_limit
    }

    /// Return the state of the given tile, or None for empty cells and cells outside
    /// the grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<&TileState> {
        self.tiles.get(y).and_then(|row| row.get(x)).and_then(|t| t.as_ref())
    }

    /// Whether the level is complete.
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Request a one-cell move in the given direction.
    ///
    /// The request is silently ignored unless the session is idle. A target outside the
    /// grid or on an empty cell rejects the request and the session stays idle.
    pub fn request_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase != Phase::Idle {
            debug!("Move {direction:?} ignored: phase is {:?}", self.phase);
            return MoveOutcome::Rejected;
        }

        let (dx, dy) = direction.delta();
        let x: i64 = self.player.0 as i64 + dx;
        let y: i64 = self.player.1 as i64 + dy;
        if x < 0 || y < 0 {
            debug!("Move {direction:?} rejected: target outside the grid");
            return MoveOutcome::Rejected;
        }

        let target: (usize, usize) = (x as usize, y as usize);
        match self.level.code_at(target.0, target.1) {
            Some(code) if code != EMPTY_CELL => {
                self.phase = Phase::Resolving;
                self.pending = Some(target);
                debug!("Move {direction:?} accepted: {:?} -> {target:?}", self.player);
                MoveOutcome::Accepted {
                    from: self.player,
                    to: target,
                }
            }
            _ => {
                debug!("Move {direction:?} rejected: target {target:?} is not a block");
                MoveOutcome::Rejected
            }
        }
    }

    /// Complete the move in flight.
    ///
    /// The renderer calls this method once the jump animation settles; callers without an
    /// animation step call it right after the request is accepted. Returns None when no
    /// move is in flight.
    pub fn resolve_move(&mut self) -> Option<MoveResolution> {
        let target: (usize, usize) = self.pending.take()?;
        self.player = target;

        let change: Option<TileChange> = self.transform_tile(target);

        let completed: Option<u32> = if self.check_win() {
            debug!("Level {} complete: score = {}", self.level.id, self.score);
            self.phase = Phase::Won;
            Some(self.score)
        } else {
            self.phase = Phase::Idle;
            None
        };

        Some(MoveResolution {
            position: target,
            change,
            completed,
        })
    }

    /// Transform the given tile on its first visit and award its points.
    fn transform_tile(&mut self, cell: (usize, usize)) -> Option<TileChange> {
        let (x, y) = cell;
        let texture_key: String = self
            .level
            .block_type_at(x, y)?
            .transformed_texture_key
            .clone();

        let tile: &mut TileState = self.tiles.get_mut(y)?.get_mut(x)?.as_mut()?;
        if tile.transformed {
            return None;
        }
        tile.transformed = true;
        let kind: BlockKind = tile.kind;
        self.score += tile.point_value;
        debug!("Tile ({x}, {y}) transformed: score = {}", self.score);

        Some(TileChange {
            cell,
            kind,
            texture_key,
            score: self.score,
        })
    }

    /// Whether the player stands on the goal with enough points.
    /// Both conditions must hold.
    fn check_win(&self) -> bool {
        if self.score < self.required_score {
            return false;
        }
        let (x, y) = self.player;
        matches!(self.tile(x, y), Some(tile) if tile.kind == BlockKind::Goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::first_steps;
    use crate::level::{BlockTypeDef, common_block_types};
    use std::collections::HashMap;

    /// One row of normal blocks ending on the goal.
    fn corridor(required_score: Option<u32>) -> LevelModel {
        LevelModel {
            id: 1,
            name: String::from("Corridor"),
            layout: vec![vec![1, 1, 1, 3]],
            start_position: (0, 0),
            block_types: common_block_types(),
            required_score,
            time_limit: None,
        }
    }

    fn resolve(session: &mut PuzzleSession, direction: Direction) -> MoveResolution {
        match session.request_move(direction) {
            MoveOutcome::Accepted { .. } => session.resolve_move().unwrap(),
            MoveOutcome::Rejected => panic!("Move {direction:?} rejected"),
        }
    }

    #[test]
    fn invalid_level_is_refused() {
        let mut level: LevelModel = corridor(None);
        level.start_position = (9, 0);
        assert!(PuzzleSession::new(level).is_err());
    }

    #[test]
    fn rejected_moves_leave_the_session_idle() {
        let mut session: PuzzleSession = PuzzleSession::new(first_steps::get()).unwrap();

        // (1, 1) -> (1, 0) -> (2, 0): the cells to the east and north are then invalid.
        resolve(&mut session, Direction::North);
        resolve(&mut session, Direction::East);
        assert_eq!(session.request_move(Direction::East), MoveOutcome::Rejected);
        assert_eq!(session.request_move(Direction::North), MoveOutcome::Rejected);

        assert_eq!(session.player(), (2, 0));
        assert_eq!(session.score(), 20);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn only_one_move_resolves_without_an_intervening_resolution() {
        let mut session: PuzzleSession = PuzzleSession::new(corridor(None)).unwrap();

        assert!(matches!(
            session.request_move(Direction::East),
            MoveOutcome::Accepted {
                from: (0, 0),
                to: (1, 0)
            }
        ));

        // Second request while the first move is still in flight.
        assert_eq!(session.request_move(Direction::East), MoveOutcome::Rejected);
        assert_eq!(session.phase(), Phase::Resolving);

        session.resolve_move().unwrap();
        assert_eq!(session.player(), (1, 0));
        assert!(session.resolve_move().is_none());
    }

    #[test]
    fn transformed_tiles_never_score_twice() {
        let mut session: PuzzleSession = PuzzleSession::new(corridor(None)).unwrap();

        let first: MoveResolution = resolve(&mut session, Direction::East);
        assert_eq!(first.change.as_ref().map(|c| c.score), Some(10));

        resolve(&mut session, Direction::West);
        let back: MoveResolution = resolve(&mut session, Direction::East);
        assert!(back.change.is_none());
        assert_eq!(session.score(), 20);
    }

    #[test]
    fn transformation_reports_the_renderer_keys() {
        let mut session: PuzzleSession = PuzzleSession::new(corridor(None)).unwrap();
        let resolution: MoveResolution = resolve(&mut session, Direction::East);
        let change: TileChange = resolution.change.unwrap();
        assert_eq!(change.cell, (1, 0));
        assert_eq!(change.kind, BlockKind::Normal);
        assert_eq!(change.texture_key, "block_pink");
    }

    #[test]
    fn score_alone_does_not_win() {
        // Every block is worth enough on its own, but the player stands on a normal block.
        let mut block_types: HashMap<u8, BlockTypeDef> = common_block_types();
        if let Some(def) = block_types.get_mut(&1) {
            def.points = 100;
        }
        let mut level: LevelModel = corridor(Some(100));
        level.block_types = block_types;

        let mut session: PuzzleSession = PuzzleSession::new(level).unwrap();
        let resolution: MoveResolution = resolve(&mut session, Direction::East);
        assert!(resolution.completed.is_none());
        assert!(session.score() >= session.required_score());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn goal_alone_does_not_win() {
        let level: LevelModel = LevelModel {
            id: 1,
            name: String::from("Goal first"),
            layout: vec![vec![1, 3, 1]],
            start_position: (0, 0),
            block_types: common_block_types(),
            required_score: Some(1000),
            time_limit: None,
        };

        let mut session: PuzzleSession = PuzzleSession::new(level).unwrap();
        let resolution: MoveResolution = resolve(&mut session, Direction::East);
        assert!(resolution.completed.is_none());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn winning_needs_the_score_and_the_goal() {
        let mut session: PuzzleSession = PuzzleSession::new(corridor(None)).unwrap();
        // Total = 3 * 10 + 50 = 80, required = 56.
        assert_eq!(session.required_score(), 56);

        resolve(&mut session, Direction::East);
        resolve(&mut session, Direction::East);
        let last: MoveResolution = resolve(&mut session, Direction::East);

        // The start tile was never landed on: 2 * 10 + 50.
        assert_eq!(last.completed, Some(70));
        assert!(session.is_won());

        // Post-win moves are silently ignored.
        assert_eq!(session.request_move(Direction::West), MoveOutcome::Rejected);
        assert_eq!(session.player(), (3, 0));
    }

    #[test]
    fn first_steps_walkthrough_wins_on_the_goal() {
        let mut session: PuzzleSession = PuzzleSession::new(first_steps::get()).unwrap();
        // Derived requirement: 70% of 12 normal blocks and the goal block.
        assert_eq!(session.required_score(), (12 * 10 + 50) * 7 / 10);

        let moves: [Direction; 10] = [
            Direction::East,
            Direction::North,
            Direction::West,
            Direction::West,
            Direction::South,
            Direction::South,
            Direction::East,
            Direction::South,
            Direction::East,
            Direction::East,
        ];
        let mut last: Option<MoveResolution> = None;
        for direction in moves {
            last = Some(resolve(&mut session, direction));
        }

        // Nine normal blocks and the goal block were visited.
        assert_eq!(session.score(), 9 * 10 + 50);
        assert_eq!(last.unwrap().completed, Some(140));
        assert!(session.is_won());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut session: PuzzleSession = PuzzleSession::new(corridor(None)).unwrap();
        resolve(&mut session, Direction::East);
        resolve(&mut session, Direction::East);

        session.reset();
        assert_eq!(session.player(), (0, 0));
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.tile(1, 0).unwrap().transformed);
    }
}
