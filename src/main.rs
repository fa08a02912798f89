use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use campusbot::config::AppConfig;
use campusbot::core::assistant::Assistant;
use campusbot::core::logging;
use campusbot::tui::ChatApp;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();
    let assistant = Assistant::new(Arc::new(config.repository()));

    // `campusbot <question...>` answers once and exits
    let question = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !question.trim().is_empty() {
        let _log_guard = logging::init(&config.logging.level);
        log::info!("Campusbot v{} answering one question", campusbot::VERSION);
        println!("{}", assistant.answer(&question).await);
        return Ok(());
    }

    let _log_guard = logging::init_tui(&config.logging.level);
    log::info!("Campusbot v{} starting", campusbot::VERSION);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ChatApp::new(assistant, config.chat.clone());
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
