//! Sliding window over the digits entered so far
//!
//! The window is always [`WINDOW_WIDTH`] slots wide. Once the player is past
//! the first [`WINDOW_LEAD`] digits it scrolls so the cursor stays at slot
//! 20; before that the window is pinned to the start and the cursor walks
//! right from slot 0.

use crate::digits::DigitSequence;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const WINDOW_WIDTH: usize = 40;

/// Entered digits kept visible to the left of the cursor
pub const WINDOW_LEAD: usize = 20;

pub const PLACEHOLDER: char = '_';

/// Marks the slot of the next digit to enter
pub const CURSOR: char = '■';

/// The window text for `position`, without the leading `3.`
pub fn digit_window(digits: &DigitSequence, position: usize) -> String {
    let start = position.saturating_sub(WINDOW_LEAD);
    let end = start + WINDOW_WIDTH;

    let mut slots = vec![PLACEHOLDER; WINDOW_WIDTH];
    for index in start..position.min(end) {
        if let Some(c) = digits.digit_char(index) {
            slots[index - start] = c;
        }
    }
    if position < end {
        slots[position - start] = CURSOR;
    }

    slots.into_iter().collect()
}

fn slot_span(c: char) -> Span<'static> {
    let style = match c {
        CURSOR => Style::default()
            .fg(DEFAULT_THEME.cursor)
            .add_modifier(Modifier::BOLD),
        PLACEHOLDER => Style::default().fg(DEFAULT_THEME.comment),
        _ => Style::default().fg(DEFAULT_THEME.digit),
    };
    Span::styled(c.to_string(), style)
}

/// Render `3.` followed by the window
pub fn render_digits_pane(frame: &mut Frame, area: Rect, digits: &DigitSequence, position: usize) {
    let mut spans = vec![Span::styled(
        "3.",
        Style::default()
            .fg(DEFAULT_THEME.digit)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(digit_window(digits, position).chars().map(slot_span));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(len: usize) -> DigitSequence {
        let digits: String = (0..len).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
        DigitSequence::new(digits).unwrap()
    }

    #[test]
    fn test_window_at_start() {
        let digits = sequence(100);
        let window = digit_window(&digits, 0);
        assert_eq!(window.chars().count(), WINDOW_WIDTH);
        assert!(window.starts_with(CURSOR));
        assert_eq!(window.chars().filter(|&c| c == PLACEHOLDER).count(), 39);
    }

    #[test]
    fn test_window_before_scrolling() {
        let digits = DigitSequence::new("14159265358979323846").unwrap();
        let window: Vec<char> = digit_window(&digits, 5).chars().collect();
        assert_eq!(window[..5].iter().collect::<String>(), "14159");
        assert_eq!(window[5], CURSOR);
        assert_eq!(window[6], PLACEHOLDER);
    }

    #[test]
    fn test_cursor_pinned_once_scrolling() {
        let digits = sequence(1000);
        for position in [20, 21, 57, 999] {
            let window: Vec<char> = digit_window(&digits, position).chars().collect();
            assert_eq!(window.len(), WINDOW_WIDTH);
            assert_eq!(window[WINDOW_LEAD], CURSOR, "position {}", position);
            assert_eq!(window.iter().filter(|&&c| c == CURSOR).count(), 1);
            // The slot left of the cursor is the last digit entered
            assert_eq!(window[WINDOW_LEAD - 1], digits.digit_char(position - 1).unwrap());
            assert!(window[WINDOW_LEAD + 1..].iter().all(|&c| c == PLACEHOLDER));
        }
    }

    #[test]
    fn test_exactly_one_cursor_for_every_position() {
        let digits = sequence(200);
        for position in 0..=200 {
            let window = digit_window(&digits, position);
            assert_eq!(window.chars().count(), WINDOW_WIDTH);
            assert_eq!(window.chars().filter(|&c| c == CURSOR).count(), 1);
        }
    }
}
