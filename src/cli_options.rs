/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers designing levels.
//! In command-line mode, Isoblocks lists the built-in levels and generates random levels
//! that developers can review, as an ASCII grid or as JSON, before wiring them into the
//! game.
//!
//! # Examples
//!
//! List the built-in levels:
//!
//! ```
//! $ isoblocks --ls
//!   1  First Steps  (4x4, 119 points to win)
//!   2  Special Blocks  (4x4, 150 points to win)
//!   3  The Challenge  (5x5, 250 points to win)
//! ```
//!
//! Generate two levels at progression number 6 from a fixed seed, and preview them:
//!
//! ```
//! $ isoblocks -n 6 -c 2 -s 1234
//! Level 6 (7x7): start (1, 2), 290 points to win, 90s
//!   # # * . # # #
//!   . S # # * . #
//!   ...
//! ```

use clap::{CommandFactory, Parser, ValueEnum};
use log::debug;
use rand::Rng;
use std::env;
use std::fmt;
use std::time::Instant;

use crate::catalog::LevelCatalog;
use crate::config::COPYRIGHT_NOTICE;
use crate::generator::random_level::RandomLevel;
use crate::level::{BlockKind, EMPTY_CELL, LevelModel};
use crate::session::{Direction, MoveOutcome, PuzzleSession};

/// Output format for generated levels.
#[derive(ValueEnum, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// ASCII grid preview.
    #[default]
    Grid,

    /// JSON document, one per level.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Grid => write!(f, "grid"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Build random Isoblocks levels for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE, ignore_errors = true)]
struct Args {
    /// List the built-in levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Progression number of the levels to generate
    #[arg(short, long, group = "generate")]
    number: Option<u32>,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Seed for the random source, for reproducible levels
    #[arg(short, long, requires = "generate")]
    seed: Option<u64>,

    /// Output format for the generated levels
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Grid, requires = "generate")]
    output: OutputFormat,

    /// Simulate that many random moves on each generated level
    #[arg(short, long, default_value_t = 0, requires = "generate")]
    walk: usize,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Print the command usage.
pub fn print_usage() {
    let _ = Args::command().print_help();
}

/// Parse and process command-line options.
///
/// Return the process exit code, or None when no action was requested.
pub fn parse() -> Option<u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if !args.ls && args.number.is_none() {
        return None;
    }

    //
    // List the built-in levels
    //
    if args.ls {
        let catalog: LevelCatalog = LevelCatalog::builtin();
        for id in catalog.ids() {
            if let Some(level) = catalog.get(id) {
                println!(
                    "{:>3}  {}  ({}x{}, {} points to win)",
                    level.id,
                    level.name,
                    level.width(),
                    level.height(),
                    level.win_score()
                );
            }
        }
        return Some(0);
    }

    //
    // Generate random levels
    //
    let number: u32 = args.number.expect("Cannot retrieve the progression number");
    let mut generator: RandomLevel<_> = match args.seed {
        Some(seed) => RandomLevel::from_seed(seed),
        None => RandomLevel::from_seed(rand::rng().random()),
    };

    let start: Instant = Instant::now();
    let mut total_cells: usize = 0;
    let mut total_required: u64 = 0;
    let mut total_path_len: usize = 0;

    for i in 0..args.count {
        debug!("Iteration {i}");
        let level: LevelModel = match generator.generate(number) {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Cannot generate a level for number {number}: {e}");
                return Some(1);
            }
        };
        total_cells += level.width() * level.height();
        total_required += u64::from(level.win_score());
        total_path_len += generator.path.len();

        match args.output {
            OutputFormat::Grid => print_grid(&level),
            OutputFormat::Json => match serde_json::to_string_pretty(&level) {
                Ok(doc) => println!("{doc}"),
                Err(e) => {
                    eprintln!("Cannot serialize the level: {e}");
                    return Some(1);
                }
            },
        }

        if args.walk > 0 {
            walk_level(&level, args.walk);
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
            levels = {}
      average cells = {}
average path length = {}
     average to win = {} points
         total time = {}s",
            args.count,
            total_cells / args.count,
            total_path_len / args.count,
            total_required / args.count as u64,
            start.elapsed().as_secs_f32()
        );
    }
    Some(0)
}

/// Print a level as an ASCII grid.
///
/// `S` marks the start cell, `#` a normal block, `*` a special block, `G` the goal, and
/// `.` an empty cell.
fn print_grid(level: &LevelModel) {
    println!(
        "Level {} ({}x{}): start {:?}, {} points to win{}",
        level.id,
        level.width(),
        level.height(),
        level.start_position,
        level.win_score(),
        match level.time_limit {
            Some(t) => format!(", {t}s"),
            None => String::new(),
        }
    );
    for (y, row) in level.layout.iter().enumerate() {
        let line: Vec<&str> = row
            .iter()
            .enumerate()
            .map(|(x, code)| {
                if (x, y) == level.start_position {
                    "S"
                } else if *code == EMPTY_CELL {
                    "."
                } else {
                    match level.block_types.get(code).map(|def| def.kind) {
                        Some(BlockKind::Special) => "*",
                        Some(BlockKind::Goal) => "G",
                        _ => "#",
                    }
                }
            })
            .collect();
        println!("  {}", line.join(" "));
    }
}

/// Simulate a random walk through a session, to get a feel for the level.
fn walk_level(level: &LevelModel, moves: usize) {
    let mut session: PuzzleSession = match PuzzleSession::new(level.clone()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Cannot start a session for {}: {e}", level.name);
            return;
        }
    };

    let mut rng = rand::rng();
    println!("Random walk ({moves} moves max):");
    for _ in 0..moves {
        let direction: Direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        match session.request_move(direction) {
            MoveOutcome::Rejected => (),
            MoveOutcome::Accepted { to, .. } => {
                if let Some(resolution) = session.resolve_move() {
                    if let Some(change) = &resolution.change {
                        println!("  jump to {to:?}: {} points", change.score);
                    }
                    if let Some(final_score) = resolution.completed {
                        println!("  level complete with {final_score} points");
                        return;
                    }
                }
            }
        }
    }
    println!(
        "  walk ended at {:?} with {} of {} points",
        session.player(),
        session.score(),
        session.required_score()
    );
}
