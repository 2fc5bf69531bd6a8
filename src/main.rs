mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::AppConfig;
use controller::AppController;
use model::{AppModel, Catalog, FavoritesStore, FileBackend, LyricsClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== lyrics-tui starting ===");

    let config = AppConfig::default();

    let catalog = LyricsClient::new(&config.api_base_url)?;
    let favorites = FavoritesStore::new(
        Arc::new(FileBackend::new(&config.cache_dir)),
        &config.favorites_slot,
    );
    tracing::info!(
        api = %config.api_base_url,
        favorites = favorites.load().len(),
        "Catalog client and favorites store ready"
    );

    let model = Arc::new(AppModel::new(favorites.subscribe()));
    let controller = AppController::new(model.clone(), catalog, favorites, &config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller, config.poll_interval).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("lyrics-tui shutting down");
    Ok(())
}

async fn run_app<C: Catalog>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController<C>,
    poll_interval: Duration,
) -> io::Result<()> {
    loop {
        let ui_state = model.get_ui_state().await;
        let tree = controller.display_tree().await;

        terminal.draw(|f| {
            AppView::render(f, &tree, &ui_state);
        })?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
