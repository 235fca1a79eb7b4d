// Pi Hangman: memorize the digits of π, one life per wrong digit

use std::fs::File;
use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use pi_hangman::config::GameConfig;
use pi_hangman::game::Session;
use pi_hangman::storage::{DigitCache, DigitRepository, ScoreFile};
use pi_hangman::ui::App;

/// Send log output to a file; the TUI owns the terminal
fn init_logging(config: &GameConfig) -> io::Result<()> {
    let file = File::create(&config.log_path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::default();
    init_logging(&config)?;

    eprintln!("Welcome to the Pi Memorization Game!");
    let cache = DigitCache::new(
        &config.digits_path,
        config.max_digits,
        config.generation_len(),
    );
    if cache.exists() {
        eprintln!("Loading...");
    } else {
        eprintln!("Generating π digits (this may take a moment)...");
    }
    let digits = cache.load_or_generate()?;

    let scores = ScoreFile::new(&config.score_path);
    let session = Session::new(digits, scores, config);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Game aborted: {}", err);
        return Err(err.into());
    }

    log::info!(
        "Session over after {} game(s), high score {}",
        app.session.games_played(),
        app.session.high_score()
    );
    println!("Thanks for playing!");
    Ok(())
}
