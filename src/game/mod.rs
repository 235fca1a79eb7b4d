//! Game rules, independent of any terminal
//!
//! - [`engine`]: one play-through as an explicit state machine
//! - [`session`]: back-to-back play-throughs sharing a high score
//!
//! # Rules
//!
//! The player enters the decimals of π one at a time. A correct digit moves
//! the position forward; a wrong one costs a life. The game is lost when all
//! lives are gone and won when the position reaches the configured maximum.
//! Anything that is not a single digit is ignored without penalty.

pub mod engine;
pub mod session;

pub use engine::{parse_guess, Game, GameState, GameStatus, GuessOutcome};
pub use session::{wants_replay, Session};
