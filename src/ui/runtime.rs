use crate::config::Config;
use crate::store::ItemStoreClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_store_worker;
use anyhow::{Context, Result};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

pub fn run(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("skinmarket-store")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = ItemStoreClient::new(&config.api.url)?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let commands = spawn_store_worker(runtime.handle(), client, events.sender());

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let mut app = App::new(config);
    app.attach_store(commands);
    tracing::info!(page = ?app.page(), url = %config.api.url, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Store(event)) => app.on_store_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("UI stopped");
    Ok(())
}
