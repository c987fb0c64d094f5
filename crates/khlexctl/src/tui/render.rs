//! Rendering - UI drawing functions for the browse view, modal, and overlays.
//!
//! Everything drawn here comes straight from [`AppState`]; no state mutation
//! happens during a draw. User-supplied text always passes through
//! `sanitize` before it reaches the terminal.

use khlex_common::{results_count_label, sanitize, LexiconData, Term};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::palette::Palette;
use super::state::{AppState, View};
use crate::cli::VERSION;

/// Draw the UI for the current view, plus any overlays.
pub fn draw_ui(f: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let size = f.size();

    // Theme background for the whole screen
    let backdrop = Block::default().style(Style::default().bg(palette.background));
    f.render_widget(backdrop, size);

    match &state.view {
        View::Loading => draw_loading(f, size, &palette),
        View::Error(message) => draw_error(f, size, message, &palette),
        View::Browse => draw_browse(f, size, state, &palette),
    }

    if state.show_help {
        draw_help_overlay(f, size, &palette);
    }
}

fn draw_loading(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading the lexicon...",
            Style::default().fg(palette.accent),
        )),
        Line::from(Span::styled(
            "terms, categories and site metadata",
            Style::default().fg(palette.muted),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, centered_rect(60, 30, area));
}

/// The error view is terminal for the session: no retry, just the message.
fn draw_error(f: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Failed to load the lexicon",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            sanitize(message),
            Style::default().fg(palette.foreground),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Restart khlexctl to try again.",
            Style::default().fg(palette.muted),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.error)),
        );
    f.render_widget(paragraph, centered_rect(70, 40, area));
}

fn draw_browse(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // search bar
            Constraint::Length(1), // category bar
            Constraint::Min(0),    // results
            Constraint::Length(1), // status bar
        ])
        .split(area);

    draw_header(f, chunks[0], state, palette);
    draw_search_bar(f, chunks[1], state, palette);
    draw_category_bar(f, chunks[2], state, palette);

    if state.no_results() {
        draw_no_results(f, chunks[3], palette);
    } else {
        draw_results(f, chunks[3], state, palette);
    }

    draw_status_bar(f, chunks[4], state, palette);

    if let Some(index) = state.modal {
        if let Some(data) = &state.data {
            if let Some(term) = data.terms.get(index) {
                draw_modal(f, area, term, data, palette);
            }
        }
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let site_version = state
        .data
        .as_ref()
        .and_then(|d| d.site.version())
        .unwrap_or("unknown");

    let text = compose_header_text(VERSION, site_version);
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            text,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(header, area);
}

fn draw_search_bar(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    // Cursor block marks the input position; editing is end-of-line only
    let input = Line::from(vec![
        Span::styled(
            sanitize(&state.search_input),
            Style::default().fg(palette.foreground),
        ),
        Span::styled("▌", Style::default().fg(palette.accent)),
    ]);

    let search = Paragraph::new(input).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(search, area);
}

fn draw_category_bar(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for key in state.category_keys() {
        let label = match (&state.data, key.as_str()) {
            (_, "all") => "All".to_string(),
            (Some(data), key) => format!(
                "{} {}",
                data.category_icon(key),
                sanitize(data.category_label(key))
            ),
            (None, key) => key.to_string(),
        };

        let style = if key == state.query.category {
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };

        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_results(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let Some(data) = &state.data else { return };

    let content_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = state
        .visible
        .iter()
        .filter_map(|&index| data.terms.get(index))
        .map(|term| ListItem::new(card_lines(term, data, palette, content_width)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", results_count_label(state.visible.len())))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        )
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .fg(palette.highlight_fg),
        );

    let mut list_state = ListState::default();
    if !state.visible.is_empty() {
        list_state.select(Some(state.selected));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

/// The distinct zero-matches branch: count label plus a hint, no cards.
fn draw_no_results(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No terms found",
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try a different search or category.",
            Style::default().fg(palette.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", results_count_label(0)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    f.render_widget(paragraph, area);
}

/// One card: names, category line, wrapped description, tags.
fn card_lines(
    term: &Term,
    data: &LexiconData,
    palette: &Palette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut title = vec![
        Span::styled(
            sanitize(&term.english_name),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            sanitize(&term.khmer_name),
            Style::default().fg(palette.foreground),
        ),
    ];
    if term.is_verified() {
        title.push(Span::raw("  "));
        title.push(Span::styled("✓", Style::default().fg(palette.verified)));
    }
    lines.push(Line::from(title));

    lines.push(Line::from(Span::styled(
        format!(
            "{} {}",
            data.category_icon(&term.category_key),
            sanitize(data.category_label(&term.category_key))
        ),
        Style::default().fg(palette.muted),
    )));

    if let Some(description) = &term.description {
        for wrapped in textwrap::wrap(&sanitize(description), width.max(20)) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(palette.foreground),
            )));
        }
    }

    if let Some(tags) = &term.tags {
        let tags: Vec<String> = tags.iter().map(|t| sanitize(t)).collect();
        lines.push(Line::from(Span::styled(
            format!("# {}", tags.join(", ")),
            Style::default().fg(palette.muted),
        )));
    }

    lines.push(Line::from(""));
    lines
}

/// Term detail overlay.
fn draw_modal(f: &mut Frame, area: Rect, term: &Term, data: &LexiconData, palette: &Palette) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let width = popup.width.saturating_sub(4) as usize;
    let label = Style::default().fg(palette.muted);
    let body = Style::default().fg(palette.foreground);

    let mut lines = vec![
        Line::from(Span::styled(
            sanitize(&term.khmer_name),
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} {}",
                data.category_icon(&term.category_key),
                sanitize(data.category_label(&term.category_key))
            ),
            label,
        )),
        Line::from(""),
    ];

    if let Some(description) = &term.description {
        for wrapped in textwrap::wrap(&sanitize(description), width.max(20)) {
            lines.push(Line::from(Span::styled(wrapped.into_owned(), body)));
        }
        lines.push(Line::from(""));
    }

    if let Some(examples) = &term.examples {
        if let Some(english) = &examples.english_example {
            lines.push(Line::from(vec![
                Span::styled("EN  ", label),
                Span::styled(sanitize(english), body),
            ]));
        }
        if let Some(khmer) = &examples.khmer_example {
            lines.push(Line::from(vec![
                Span::styled("KM  ", label),
                Span::styled(sanitize(khmer), body),
            ]));
        }
        lines.push(Line::from(""));
    }

    if let Some(tags) = &term.tags {
        let tags: Vec<String> = tags.iter().map(|t| sanitize(t)).collect();
        lines.push(Line::from(vec![
            Span::styled("Tags  ", label),
            Span::styled(tags.join(", "), body),
        ]));
    }
    if let Some(contributors) = &term.contributors {
        let contributors: Vec<String> = contributors.iter().map(|c| sanitize(c)).collect();
        lines.push(Line::from(vec![
            Span::styled("By  ", label),
            Span::styled(contributors.join(", "), body),
        ]));
    }
    if let Some(date) = &term.date_added {
        lines.push(Line::from(vec![
            Span::styled("Added  ", label),
            Span::styled(sanitize(date), body),
        ]));
    }
    if let Some(reference) = &term.reference {
        lines.push(Line::from(vec![
            Span::styled("Ref  ", label),
            Span::styled(sanitize(reference), Style::default().fg(palette.accent)),
        ]));
    }
    if let Some(status) = &term.status {
        lines.push(Line::from(vec![
            Span::styled("Status  ", label),
            Span::styled(sanitize(status), Style::default().fg(palette.verified)),
        ]));
    }

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .title(format!(" {} ", sanitize(&term.english_name)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(modal, popup);
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let text = compose_status_text(state.theme.as_str(), state.notice.as_deref());
    let style = if state.notice.is_some() {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let status = Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(text, style)]));
    f.render_widget(status, area);
}

fn draw_help_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.foreground);

    let entries = [
        ("type", "search as you type (300ms quiet period)"),
        ("Tab / Shift+Tab", "cycle category filter"),
        ("Up / Down", "move selection"),
        ("Enter", "open term detail"),
        ("Esc", "close overlay / clear search / quit"),
        ("Ctrl+T", "toggle light/dark theme"),
        ("Ctrl+E", "export lexicon to JSON"),
        ("F1", "toggle this help"),
        ("Ctrl+C", "quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (keys, explanation) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", keys), key_style),
            Span::styled(explanation, text_style),
        ]));
    }

    let help = Paragraph::new(lines)
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .title(" Keyboard shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(help, popup);
}

/// Header line: tool version plus the published lexicon version.
fn compose_header_text(version: &str, site_version: &str) -> String {
    format!("khlex v{} | Khmer Tech Lexicon | data v{}", version, site_version)
}

/// Status line: a notice when present, key hints otherwise.
fn compose_status_text(theme: &str, notice: Option<&str>) -> String {
    match notice {
        Some(notice) => notice.to_string(),
        None => format!(
            "theme: {} | Tab category | Enter detail | Ctrl+E export | Ctrl+T theme | F1 help",
            theme
        ),
    }
}

/// Centered sub-rectangle, sized as a percentage of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
