//! Score, lives and the digit prompt

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Values shown under the digit window
pub struct StatsRenderData<'a> {
    pub position: usize,
    pub high_score: u64,
    pub lives: u32,
    /// What the player has typed since the last Enter
    pub input: &'a str,
}

fn stat_line(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(value, value_style),
    ])
}

/// Render the stats block followed by the input prompt
pub fn render_stats_pane(frame: &mut Frame, area: Rect, data: &StatsRenderData) {
    let number = Style::default().fg(DEFAULT_THEME.digit);
    let lives_style = if data.lives <= 1 {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.success)
    };

    let lines = vec![
        stat_line("Current Score", format!("{} digits", data.position), number),
        stat_line("High Score", format!("{} digits", data.high_score), number),
        stat_line("Lives remaining", data.lives.to_string(), lives_style),
        Line::default(),
        Line::from(vec![
            Span::styled(
                "Enter next digit: ",
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(data.input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
