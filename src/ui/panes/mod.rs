//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function that draws one part of the
//! screen from plain values.
//!
//! # Pane Modules
//!
//! - [`hangman`]: the gallows figure, one stage per mistake
//! - [`digits`]: the sliding 40-slot window over the digits entered so far
//! - [`stats`]: score, high score, lives and the input prompt
//! - [`outcome`]: the end-of-game screen and the replay prompt
//! - [`status`]: status bar with the last message and keybindings

pub mod digits;
pub mod hangman;
pub mod outcome;
pub mod stats;
pub mod status;

// Re-export render functions for convenience
pub use digits::{digit_window, render_digits_pane};
pub use hangman::{hangman_stage, render_hangman_pane, HANGMAN_HEIGHT};
pub use outcome::{render_outcome_pane, OutcomeRenderData};
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::{render_status_bar, StatusRenderData};
