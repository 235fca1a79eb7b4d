//! # Introduction
//!
//! A hangman-style memorization game for the digits of π. The player types
//! the decimals one at a time; every wrong digit adds a part to the gallows,
//! and the sixth wrong digit ends the game. The best run is kept across
//! sessions.
//!
//! ## Pieces
//!
//! ```text
//! Session → Game → (DigitRepository, ScoreRepository)
//!    ↑
//!   App (ratatui event loop + panes)
//! ```
//!
//! 1. [`digits`]: the [`digits::DigitSequence`] and its generator.
//! 2. [`storage`]: the digit cache and the high score record behind two
//!    small traits, with in-memory versions for tests.
//! 3. [`game`]: the rules, with [`game::Game`] for one play-through and
//!    [`game::Session`] for replays.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 5. [`config`] and [`errors`]: shared settings and the crate error type.

pub mod config;
pub mod digits;
pub mod errors;
pub mod game;
pub mod storage;
pub mod ui;
