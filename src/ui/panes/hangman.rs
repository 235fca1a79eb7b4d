//! Gallows figure indexed by the number of mistakes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Lines in every stage of the figure
pub const HANGMAN_HEIGHT: u16 = 6;

/// One figure per mistake count; the last one is fully drawn
const STAGES: [[&str; HANGMAN_HEIGHT as usize]; 7] = [
    [
        "   -----",
        "   |   |",
        "       |",
        "       |",
        "       |",
        "       |",
    ],
    [
        "   -----",
        "   |   |",
        "   O   |",
        "       |",
        "       |",
        "       |",
    ],
    [
        "   -----",
        "   |   |",
        "   O   |",
        "   |   |",
        "       |",
        "       |",
    ],
    [
        "   -----",
        "   |   |",
        "   O   |",
        "  /|   |",
        "       |",
        "       |",
    ],
    [
        "   -----",
        "   |   |",
        "   O   |",
        "  /|\\  |",
        "       |",
        "       |",
    ],
    [
        "   -----",
        "   |   |",
        "   O   |",
        "  /|\\  |",
        "  /    |",
        "       |",
    ],
    [
        "   -----",
        "   |   |",
        "   O   |",
        "  /|\\  |",
        "  / \\  |",
        "       |",
    ],
];

/// The figure for `mistakes` wrong guesses.
///
/// Counts past the last stage keep showing the complete figure.
pub fn hangman_stage(mistakes: u32) -> &'static [&'static str] {
    let index = (mistakes as usize).min(STAGES.len() - 1);
    &STAGES[index]
}

/// Render the gallows for the current mistake count
pub fn render_hangman_pane(frame: &mut Frame, area: Rect, mistakes: u32) {
    let style = if mistakes as usize >= STAGES.len() - 1 {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.gallows)
    };

    let lines: Vec<Line> = hangman_stage(mistakes)
        .iter()
        .map(|row| Line::styled(*row, style))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
