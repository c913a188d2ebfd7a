//! artist-review - A terminal UI for reviewing classified artists
//!
//! Loads a classification YAML, lets the user check which artists to keep,
//! and exports or re-imports the selection.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {}\n\n{}", message, cli::USAGE);
            std::process::exit(2);
        }
    };
    if args.show_help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let log_dir = logging::init();

    let mut config = Config::load().unwrap_or_default();
    args.apply(&mut config);
    if let Err(e) = config.save() {
        tracing::warn!(error = %e, "failed to save config");
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new(config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if app.config_changed {
        if let Err(e) = app.config.save() {
            tracing::warn!(error = %e, "failed to save config");
        }
    }

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "exiting with error");
        eprintln!("Error: {:?}", err);
        eprintln!("Logs: {}", log_dir.display());
        std::process::exit(1);
    }

    tracing::info!("artist-review exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                tracing::trace!(action = %a, "update");
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
