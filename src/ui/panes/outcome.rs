//! End-of-game screen
//!
//! Shown once a game is won or lost, together with the replay prompt.

use crate::game::GameStatus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct OutcomeRenderData<'a> {
    pub status: GameStatus,
    pub position: usize,
    pub high_score: u64,
    pub max_digits: usize,
    /// Digits that followed the last correct one
    pub preview: &'a str,
    /// Answer typed so far at the replay prompt
    pub input: &'a str,
}

fn summary_lines(data: &OutcomeRenderData) -> Vec<Line<'static>> {
    let fg = Style::default().fg(DEFAULT_THEME.fg);
    let heading = |text: String, color: Color| {
        Line::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    match data.status {
        GameStatus::Won => vec![
            heading("CONGRATULATIONS!".to_string(), DEFAULT_THEME.success),
            Line::styled(
                format!(
                    "You've reached the maximum score of {} digits!",
                    data.max_digits
                ),
                fg,
            ),
            Line::styled("You are truly a Pi master!", fg),
        ],
        GameStatus::Lost => vec![
            heading(
                format!("Game Over! Final score: {} digits", data.position),
                DEFAULT_THEME.error,
            ),
            Line::styled(format!("High Score: {} digits", data.high_score), fg),
            Line::default(),
            Line::from(vec![
                Span::styled("The next few digits were: ", fg),
                Span::styled(
                    format!("{}...", data.preview),
                    Style::default().fg(DEFAULT_THEME.digit),
                ),
            ]),
        ],
        // Not reachable from the app, which only shows this pane after a game ends
        GameStatus::Playing => vec![Line::styled(
            "Game in progress",
            Style::default().fg(DEFAULT_THEME.comment),
        )],
    }
}

/// Render the result of the finished game and ask to play again
pub fn render_outcome_pane(frame: &mut Frame, area: Rect, data: &OutcomeRenderData) {
    let mut lines = summary_lines(data);
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "Would you like to play again? (y/n): ",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(data.input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}
