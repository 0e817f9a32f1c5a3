use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use ctfdash::api::ApiClient;
use ctfdash::config::{AppConfig, Args};
use ctfdash::services::{spawn_worker, ApiCommand, ApiResponse};
use ctfdash::{handlers, logging, ui, App, AppResult};

/// Application events
enum AppEvent {
    Terminal(CEvent),
    Api(ApiResponse),
    Tick,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_args(Args::parse())?;
    logging::init_logging(&config)?;
    tracing::info!(base = %config.api_base_url, "starting dashboard");

    let client = ApiClient::new(&config)?;

    // Command and response channels between the UI loop and the worker
    let (tx_to_worker, rx_from_ui) = mpsc::unbounded_channel::<ApiCommand>();
    let (tx_to_ui, mut rx_from_worker) = mpsc::unbounded_channel::<ApiResponse>();
    let _worker = spawn_worker(client, rx_from_ui, tx_to_ui);

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config, tx_to_worker);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Terminal input and ticks
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;

            // Check for terminal events (non-blocking)
            while event::poll(Duration::from_millis(0)).unwrap_or(false) {
                match event::read() {
                    Ok(event) => {
                        if event_tx_clone.send(AppEvent::Terminal(event)).is_err() {
                            return;
                        }
                    }
                    Err(_) => break,
                }
            }

            if event_tx_clone.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Worker responses
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        while let Some(response) = rx_from_worker.recv().await {
            if event_tx_clone.send(AppEvent::Api(response)).is_err() {
                break;
            }
        }
    });

    app.start();

    let result = run(&mut terminal, &mut app, &mut event_rx).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("dashboard closed");

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> AppResult<()> {
    while !app.ui.should_quit {
        terminal.draw(|f| ui::ui(f, app))?;

        match event_rx.recv().await {
            Some(AppEvent::Terminal(CEvent::Key(key))) => handlers::handle_key_event(key, app),
            Some(AppEvent::Terminal(_)) => {}
            Some(AppEvent::Api(response)) => app.handle_api_response(response),
            Some(AppEvent::Tick) => app.on_tick(),
            None => break,
        }
    }
    Ok(())
}
