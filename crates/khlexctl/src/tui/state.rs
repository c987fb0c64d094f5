//! Viewer state and the action dispatch.
//!
//! Every user interaction becomes an [`Action`]; [`apply_action`] is the
//! single state-update function, so the whole interaction surface is unit
//! testable without a terminal. Rendering reads this state and never mutates
//! it.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use khlex_common::{
    export_file_name, query, write_export, ExportEnvelope, LexiconData, QueryState, Term, Theme,
    ViewerConfig, ALL_CATEGORIES,
};
use tracing::warn;

use super::debounce::{Debouncer, SEARCH_DEBOUNCE};

/// Which screen the viewer shows.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Documents still loading
    Loading,
    /// Normal browsing
    Browse,
    /// Load failed; terminal for the session, a reload requires a restart
    Error(String),
}

/// User interactions, decoupled from key bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSearch(String),
    SetCategory(String),
    SelectNext,
    SelectPrev,
    OpenModal,
    CloseModal,
    ToggleTheme,
    ToggleHelp,
    Export,
    Quit,
}

/// Central viewer state - everything rendered on screen comes from this.
pub struct AppState {
    /// Loaded documents; `None` until the loader reports
    pub data: Option<LexiconData>,

    /// Committed query driving the visible set
    pub query: QueryState,

    /// Search box contents; committed to `query` after the quiet period
    pub search_input: String,

    /// Indices into `data.terms` of the match set, load order preserved
    pub visible: Vec<usize>,

    /// Selection within `visible`
    pub selected: usize,

    pub view: View,

    /// Term index shown in the detail modal
    pub modal: Option<usize>,

    pub theme: Theme,

    pub show_help: bool,

    /// One-line status-bar notice (export result, config trouble)
    pub notice: Option<String>,

    pub debounce: Debouncer,

    pub should_quit: bool,

    /// Where the theme preference is persisted
    pub config_path: PathBuf,

    /// Directory export files are written to
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            data: None,
            query: QueryState::default(),
            search_input: String::new(),
            visible: Vec::new(),
            selected: 0,
            view: View::Loading,
            modal: None,
            theme,
            show_help: false,
            notice: None,
            debounce: Debouncer::default(),
            should_quit: false,
            config_path: ViewerConfig::config_file_path(),
            export_dir: PathBuf::from("."),
        }
    }

    /// Loader finished: enter the browse view.
    pub fn set_data(&mut self, data: LexiconData) {
        self.data = Some(data);
        self.view = View::Browse;
        self.recompute();
    }

    /// Loader failed: the error view is terminal for the session.
    pub fn set_error(&mut self, message: String) {
        self.view = View::Error(message);
    }

    /// Recompute the visible set from the committed query.
    ///
    /// Always a full recomputation - the invariant is that `visible` holds
    /// exactly the terms matching the current query, in load order.
    pub fn recompute(&mut self) {
        self.visible = match &self.data {
            Some(data) => data
                .terms
                .iter()
                .enumerate()
                .filter(|(_, term)| query::matches(term, &self.query))
                .map(|(index, _)| index)
                .collect(),
            None => Vec::new(),
        };

        if self.visible.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.visible.len() - 1);
        }
    }

    /// Loaded with zero matches - the distinct no-results branch.
    pub fn no_results(&self) -> bool {
        self.data.is_some() && self.visible.is_empty()
    }

    /// The currently selected term, if any is visible.
    pub fn selected_term(&self) -> Option<&Term> {
        let data = self.data.as_ref()?;
        let index = *self.visible.get(self.selected)?;
        data.terms.get(index)
    }

    /// Category bar entries: the "all" sentinel plus every known key.
    pub fn category_keys(&self) -> Vec<String> {
        let mut keys = vec![ALL_CATEGORIES.to_string()];
        if let Some(data) = &self.data {
            keys.extend(data.categories.keys().cloned());
        }
        keys
    }

    /// Next/previous category relative to the current selection, wrapping.
    pub fn cycle_category(&self, step: isize) -> String {
        let keys = self.category_keys();
        let current = keys
            .iter()
            .position(|k| *k == self.query.category)
            .unwrap_or(0);
        let len = keys.len() as isize;
        let next = (current as isize + step).rem_euclid(len);
        keys[next as usize].clone()
    }

    /// A typed character lands in the search box and (re)arms the debounce.
    pub fn type_char(&mut self, c: char, now: Instant) {
        self.search_input.push(c);
        self.debounce.schedule(now, SEARCH_DEBOUNCE);
    }

    /// Backspace in the search box, also debounced.
    pub fn backspace(&mut self, now: Instant) {
        if self.search_input.pop().is_some() {
            self.debounce.schedule(now, SEARCH_DEBOUNCE);
        }
    }
}

fn exported_by() -> String {
    format!("khlexctl v{}", crate::cli::VERSION)
}

/// The single state-update function: deterministic, side effects limited to
/// theme persistence and export writes.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::SetSearch(text) => {
            state.search_input = text.clone();
            state.query.search_text = text;
            state.selected = 0;
            state.recompute();
        }
        Action::SetCategory(key) => {
            state.query.category = key;
            state.selected = 0;
            state.recompute();
        }
        Action::SelectNext => {
            if !state.visible.is_empty() {
                state.selected = (state.selected + 1).min(state.visible.len() - 1);
            }
        }
        Action::SelectPrev => {
            state.selected = state.selected.saturating_sub(1);
        }
        Action::OpenModal => {
            if let Some(&index) = state.visible.get(state.selected) {
                state.modal = Some(index);
            }
        }
        Action::CloseModal => {
            state.modal = None;
        }
        Action::ToggleTheme => {
            state.theme = state.theme.toggle();
            let config = ViewerConfig { theme: state.theme };
            if let Err(e) = config.save_to(&state.config_path) {
                warn!("could not persist theme: {}", e);
                state.notice = Some(format!("Theme not saved: {}", e));
            }
        }
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
        }
        Action::Export => {
            let result = match &state.data {
                Some(data) => {
                    let now = Utc::now();
                    let envelope = ExportEnvelope::new(data, now, &exported_by());
                    let path = state
                        .export_dir
                        .join(export_file_name(now.date_naive()));
                    write_export(&envelope, &path)
                        .map(|_| (envelope.metadata.total_terms, path))
                }
                None => return,
            };

            match result {
                Ok((total, path)) => {
                    state.notice = Some(format!("Exported {} terms to {}", total, path.display()));
                }
                Err(e) => {
                    warn!("export failed: {}", e);
                    state.notice = Some(format!("Export failed: {}", e));
                }
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}
