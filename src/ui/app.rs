//! Main TUI application state and logic

use crate::errors::GameError;
use crate::game::{wants_replay, GameStatus, GuessOutcome, Session};
use crate::storage::ScoreRepository;
use crate::ui::panes::{
    self, OutcomeRenderData, StatsRenderData, StatusRenderData, HANGMAN_HEIGHT,
};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding},
    Frame, Terminal,
};

/// Longest line kept in the input buffer
const MAX_INPUT_LEN: usize = 16;

/// The main application state
pub struct App<S: ScoreRepository> {
    /// Games played so far and the shared high score
    pub session: Session<S>,

    /// Characters typed since the last Enter
    pub input: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl<S: ScoreRepository> App<S> {
    pub fn new(session: Session<S>) -> Self {
        App {
            session,
            input: String::new(),
            should_quit: false,
            status_message: String::from("Welcome to the Pi Memorization Game!"),
        }
    }

    /// Run the TUI application until the player quits or declines a replay
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), GameError> {
        terminal.clear()?;
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Nothing changes between key presses, so block until the next one
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key)?;
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let block = Block::default()
            .title(" Pi Memorization Game ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border))
            .title_style(
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(main_chunks[0]);
        frame.render_widget(block, main_chunks[0]);

        let game = self.session.game();
        match game.status() {
            GameStatus::Playing => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(HANGMAN_HEIGHT),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Min(0),
                    ])
                    .split(inner);

                panes::render_hangman_pane(frame, rows[0], game.mistakes());
                panes::render_digits_pane(frame, rows[2], game.digits(), game.position());
                panes::render_stats_pane(
                    frame,
                    rows[4],
                    &StatsRenderData {
                        position: game.position(),
                        high_score: game.high_score(),
                        lives: game.lives(),
                        input: &self.input,
                    },
                );
            }
            status => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(HANGMAN_HEIGHT),
                        Constraint::Length(1),
                        Constraint::Min(0),
                    ])
                    .split(inner);

                panes::render_hangman_pane(frame, rows[0], game.mistakes());
                panes::render_outcome_pane(
                    frame,
                    rows[2],
                    &OutcomeRenderData {
                        status,
                        position: game.position(),
                        high_score: game.high_score(),
                        max_digits: game.max_digits(),
                        preview: game.preview(),
                        input: &self.input,
                    },
                );
            }
        }

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                status: game.status(),
                games_played: self.session.games_played(),
            },
        );
    }

    /// Handle keyboard events
    ///
    /// Only fails when a new high score cannot be written.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<(), GameError> {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.submit_line(&line)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Act on one submitted line: a guess while playing, otherwise the
    /// answer to the replay prompt
    pub fn submit_line(&mut self, line: &str) -> Result<(), GameError> {
        if self.session.game().status() != GameStatus::Playing {
            if wants_replay(line) {
                self.session.restart();
                self.status_message = "New game started".to_string();
            } else {
                self.should_quit = true;
            }
            return Ok(());
        }

        self.status_message = match self.session.submit(line)? {
            GuessOutcome::Ignored => "Enter a single digit".to_string(),
            GuessOutcome::Correct { new_record: true } => "Correct! New high score!".to_string(),
            GuessOutcome::Correct { new_record: false } => "Correct!".to_string(),
            GuessOutcome::Wrong => format!("Wrong! {} lives left", self.session.game().lives()),
            GuessOutcome::Finished => "The game is over".to_string(),
        };

        let game = self.session.game();
        match game.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                log::info!("Game won at {} digits", game.position());
                self.status_message = "You won!".to_string();
            }
            GameStatus::Lost => {
                log::info!(
                    "Game lost at {} digits (high score {})",
                    game.position(),
                    game.high_score()
                );
                self.status_message = "Out of lives".to_string();
            }
        }
        Ok(())
    }
}
