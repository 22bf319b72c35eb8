pub mod app;
pub mod widgets;

use crate::agent::Agent;
use crate::canvas::Canvas;
use anyhow::{Context, Result};
use app::App;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Runs the interactive canvas until the user quits.
pub async fn run(agent: Agent, canvas: Canvas) -> Result<()> {
    let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
    let result = event_loop(&mut terminal, App::new(agent, canvas)).await;
    ratatui::try_restore().context("failed to restore terminal")?;
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    tracing::info!("canvas started");

    loop {
        app.drain_messages();
        terminal.draw(|frame| widgets::draw(frame, &app))?;

        // keep the runtime responsive while waiting for input
        let ready = tokio::task::block_in_place(|| event::poll(TICK))?;
        if ready {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("canvas closed");
    Ok(())
}
