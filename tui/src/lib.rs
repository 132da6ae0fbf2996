//! Terminal frontend for the ROI assessment wizard.
//!
//! The app loop is single-threaded: a reader thread forwards keyboard input
//! and background tokio tasks forward their results, all as [`AppEvent`]s
//! over one mpsc channel. Rendering happens once per drained event batch.

mod app;
mod app_event;
mod app_event_sender;
pub mod cli;
mod terminal;
mod views;

use std::sync::mpsc::RecvTimeoutError;
use std::sync::mpsc::channel;
use std::time::Duration;

use anyhow::Context;
use roiwiz_backend_client::BackendClient;
use roiwiz_core::config::Config;
use roiwiz_core::config::roiwiz_home;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::cli::Cli;
use crate::terminal::Tui;

/// Idle redraw interval; also bounds shutdown latency.
const TICK: Duration = Duration::from_millis(100);

pub fn run_main(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path, cli.overrides())?,
        None => Config::load(cli.overrides())?,
    };
    let _log_guard = init_logging()?;
    tracing::info!(backend_url = %config.backend_url, "starting roiwiz");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let client = BackendClient::new(&config.backend_url, config.timeout)?;

    let (tx, rx) = channel::<AppEvent>();
    let sender = AppEventSender::new(tx);

    spawn_input_thread(sender.clone());

    let mut app = App::new(config, client, sender, Some(runtime.handle().clone()));
    let mut tui = Tui::new().context("failed to initialize terminal")?;

    while !app.done {
        tui.terminal.draw(|frame| views::draw(frame, &app))?;
        match rx.recv_timeout(TICK) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        // Drain whatever else arrived before redrawing.
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
    }
    Ok(())
}

/// Stdin cannot be read asynchronously without taking over the runtime, so
/// a dedicated thread blocks on crossterm and forwards events. It exits
/// when the app loop drops the receiver.
fn spawn_input_thread(tx: AppEventSender) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Key(key)) => tx.send(AppEvent::Key(key)),
                Ok(crossterm::event::Event::Resize(_, _)) => tx.send(AppEvent::Redraw),
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("input read failed: {e}");
                    tx.send(AppEvent::ExitRequest);
                    break;
                }
            }
        }
    });
}

/// File logging under `~/.roiwiz/logs/`; stderr is owned by the terminal UI.
fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = roiwiz_home().join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(log_dir, "roiwiz.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
