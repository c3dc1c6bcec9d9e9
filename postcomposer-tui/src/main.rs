//! postcomposer-tui - Terminal UI for PostComposer
//!
//! Compose per-platform posts with live previews, browse the media library,
//! and move between the application's pages.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libpostcomposer::config::resolve_data_path;
use libpostcomposer::logging;
use libpostcomposer::{Config, Platform};
use postcomposer_tui::{
    app::event::{EventHandler, TuiEvent},
    app::preview::body_placeholder,
    app::shell::Document,
    app::{reduce, Action, AppState, Page},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, viewport_columns, Tui},
    ui,
};
use ratatui::style::Style;
use tui_textarea::TextArea;

#[derive(Parser, Debug)]
#[command(name = "postcomposer-tui")]
#[command(about = "Compose and preview social posts in the terminal", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "POSTCOMPOSER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load_or_default()?,
    };

    // stderr belongs to the alternate screen, so logs go to a file
    let mut logging_config = logging::config_from_env();
    logging_config.verbose = cli.verbose;
    let log_dir = resolve_data_path()?.join("logs");
    let _log_guard = logging_config.init_file(&log_dir, "postcomposer-tui.log")?;
    tracing::info!("Starting postcomposer-tui");

    let services = ServiceHandle::new(&config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config, &services);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, config: &Config, services: &ServiceHandle) -> Result<()> {
    let mut state = AppState::with_document(
        Document::new(),
        u32::from(config.shell.mobile_breakpoint),
    );
    state = reduce(state, Action::Resize(viewport_columns(terminal)?, 0));

    let mut editors = new_editors();

    services.load_session();
    services.load_catalog();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        let active = state.composer.preview.active_tab();
        let editor = if state.shell.current_page == Page::ComposerLibrary {
            editors.get(&active)
        } else {
            None
        };

        terminal.draw(|frame| ui::render(frame, &state, editor))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) if state.composer_accepts_text() && !is_reserved(&key) => {
                match editors.get_mut(&active) {
                    Some(textarea) => {
                        textarea.input(key);
                        Action::PreviewContentEdited(textarea.lines().join("\n"))
                    }
                    None => Action::Key(key),
                }
            }
            other => other.into(),
        };

        state = reduce(state, action);

        // Results of background work
        while let Ok(action) = services.results().try_recv() {
            if let Action::SessionLoaded(ref session) = action {
                if let Some(user) = session.current_user() {
                    services.ensure_user(user.clone());
                }
            }
            state = reduce(state, action);
        }

        for effect in std::mem::take(&mut state.effects) {
            services.run(effect);
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("Exiting postcomposer-tui");
    Ok(())
}

/// One editor per platform, each with its own placeholder
fn new_editors() -> HashMap<Platform, TextArea<'static>> {
    Platform::ALL
        .into_iter()
        .map(|platform| {
            let mut textarea = TextArea::default();
            textarea.set_placeholder_text(body_placeholder(platform));
            textarea.set_cursor_line_style(Style::default());
            (platform, textarea)
        })
        .collect()
}

/// Keys the reducer handles even while an editor has focus
fn is_reserved(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::F(_), _)
            | (KeyCode::Esc, _)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Char('o'), KeyModifiers::CONTROL)
            | (KeyCode::Char('x'), KeyModifiers::CONTROL)
    ) || (key.modifiers.contains(KeyModifiers::ALT)
        && matches!(key.code, KeyCode::Char('1'..='4')))
}
