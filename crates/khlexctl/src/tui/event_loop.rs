//! Event loop - terminal setup, key handling, debounce ticks.
//!
//! The three-document load runs as a background task feeding an mpsc channel;
//! the loop polls the channel, fires the pending debounced search, draws, and
//! dispatches key events as actions.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use khlex_common::{LexiconData, ViewerConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use super::render::draw_ui;
use super::state::{apply_action, Action, AppState};
use crate::loader::{Loader, LexiconSource};

/// Messages from background tasks.
#[derive(Debug)]
pub enum ViewerMessage {
    Loaded(Box<LexiconData>),
    LoadFailed(String),
}

/// Run the viewer until the user quits.
pub async fn run(source: LexiconSource) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let config = ViewerConfig::load();
    let mut state = AppState::new(config.theme);

    // Kick off the load in the background; the loop shows the loading view
    // until a message arrives
    let (tx, mut rx) = mpsc::channel(4);
    tokio::spawn(async move {
        let message = match Loader::new(source) {
            Ok(loader) => match loader.load().await {
                Ok(data) => ViewerMessage::Loaded(Box::new(data)),
                Err(e) => ViewerMessage::LoadFailed(e.to_string()),
            },
            Err(e) => ViewerMessage::LoadFailed(e.to_string()),
        };
        let _ = tx.send(message).await;
    });

    let result = run_event_loop(&mut terminal, &mut state, &mut rx).await;

    // Always attempt cleanup, even when the loop errored
    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    rx: &mut mpsc::Receiver<ViewerMessage>,
) -> Result<()> {
    loop {
        while let Ok(message) = rx.try_recv() {
            match message {
                ViewerMessage::Loaded(data) => state.set_data(*data),
                ViewerMessage::LoadFailed(error) => state.set_error(error),
            }
        }

        // Commit the pending search once the quiet period passes
        if state.debounce.fire(Instant::now()) {
            let text = state.search_input.clone();
            apply_action(state, Action::SetSearch(text));
        }

        terminal.draw(|f| draw_ui(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(state, key);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Map a key event to state changes. Search keystrokes edit the input buffer
/// and arm the debounce; everything else dispatches an action immediately.
fn handle_key(state: &mut AppState, key: KeyEvent) {
    match (key.code, key.modifiers) {
        // Ctrl+C - exit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            apply_action(state, Action::Quit);
        }
        // Ctrl+T - toggle and persist theme
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            apply_action(state, Action::ToggleTheme);
        }
        // Ctrl+E - export the lexicon
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            apply_action(state, Action::Export);
        }
        // F1 - toggle help
        (KeyCode::F(1), _) => {
            apply_action(state, Action::ToggleHelp);
        }
        // Esc - close help, then modal, then clear search, then quit
        (KeyCode::Esc, _) => {
            if state.show_help {
                apply_action(state, Action::ToggleHelp);
            } else if state.modal.is_some() {
                apply_action(state, Action::CloseModal);
            } else if !state.search_input.is_empty() {
                state.debounce.cancel();
                apply_action(state, Action::SetSearch(String::new()));
            } else {
                apply_action(state, Action::Quit);
            }
        }
        // Tab / Shift+Tab - cycle category, undebounced
        (KeyCode::Tab, _) => {
            let next = state.cycle_category(1);
            apply_action(state, Action::SetCategory(next));
        }
        (KeyCode::BackTab, _) => {
            let prev = state.cycle_category(-1);
            apply_action(state, Action::SetCategory(prev));
        }
        // Arrows - move selection
        (KeyCode::Up, _) => {
            apply_action(state, Action::SelectPrev);
        }
        (KeyCode::Down, _) => {
            apply_action(state, Action::SelectNext);
        }
        // Enter - open term detail
        (KeyCode::Enter, _) => {
            apply_action(state, Action::OpenModal);
        }
        // Backspace - edit search, debounced
        (KeyCode::Backspace, _) => {
            state.backspace(Instant::now());
        }
        // q quits only while the search box is empty; otherwise it is input
        (KeyCode::Char('q'), KeyModifiers::NONE) if state.search_input.is_empty() => {
            apply_action(state, Action::Quit);
        }
        // Character input - edit search, debounced
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.type_char(c, Instant::now());
        }
        _ => {}
    }
}
