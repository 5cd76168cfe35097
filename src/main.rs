pub mod analytics;
pub mod app;
pub mod catalog;
pub mod config;
pub mod definitions;
pub mod event;
pub mod i18n;
pub mod logging;
pub mod tui;
pub mod ui;
pub mod votes;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use app::App;
use crossterm::event::EventStream;
use event::Event;
use futures_util::StreamExt;
use log::info;
use tui::{init, install_panic_hook, restore};
use ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    logging::init(&root)?;
    info!("mignon starting in {}", root.display());

    let settings = config::AppSettings::load(&root)?;
    let mut app = App::new(settings)?;

    install_panic_hook();
    let mut tui = init()?;

    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(250));

    while !app.should_quit {
        tui.draw(|frame| render(frame, &mut app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(raw)) => match Event::from_crossterm(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    // The event stream ending or erroring means the terminal
                    // is gone; stop cleanly.
                    Some(Err(_)) | None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.handle_key(key).await,
            Event::Mouse(mouse) => app.handle_mouse(mouse).await,
            Event::Resize => {}
        }
    }

    restore()?;
    info!("mignon exiting");
    Ok(())
}
