//! Pure rendering of [`NotesState`] into styled lines.
//!
//! Nothing here mutates state or touches the terminal; [`render_text`]
//! gives the same frame as plain text for tests and logs.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::ops::Range;

use crate::notes::Note;
use crate::ui::notes::{CreateStep, Focus, NotesState, Screen, SearchState};
use crate::ui::text_field::TextField;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, LEAF_GREEN, MUTED_TEXT, STATUS_ERROR, WARNING};

/// Rows taken by the header, footer, sort line, banners and spacing.
const RESERVED_ROWS: u16 = 12;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";
const FOCUS_MARKER: &str = "▸ ";

/// Mode content without hints or error banner.
pub fn body_lines(state: &NotesState) -> Vec<Line<'static>> {
    match &state.screen {
        Screen::List => list_lines(state),
        Screen::View { note } => read_lines(note),
        Screen::Edit { .. } => edit_lines(state),
        Screen::Search(search) => search_lines(search),
        Screen::Create(step) => create_lines(state, step),
    }
}

/// Shortcut hints for the active mode.
pub fn hints(state: &NotesState) -> &'static str {
    match &state.screen {
        Screen::List => "n: new  r: read  e: edit  /: search  t: sort  d: delete  j/k: move  q: quit",
        Screen::View { .. } => "e/i: edit  esc: back  q: quit",
        Screen::Edit { .. } => "tab: switch field  ctrl+s: save  esc: cancel",
        Screen::Search(_) => "type to search  up/down: select  enter: open  esc: back",
        Screen::Create(CreateStep::Title) => "enter: confirm title  esc: cancel",
        Screen::Create(CreateStep::Content { .. }) => "ctrl+s: save  esc: back to title",
    }
}

/// Error banner, identical in every mode. Empty when there is no error.
pub fn error_lines(state: &NotesState) -> Vec<Line<'static>> {
    match &state.last_error {
        Some(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            )),
        ],
        None => Vec::new(),
    }
}

/// The whole frame body: content, hints, then the error banner.
pub fn view_lines(state: &NotesState) -> Vec<Line<'static>> {
    let mut lines = body_lines(state);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hints(state),
        Style::default().fg(MUTED_TEXT),
    )));
    lines.extend(error_lines(state));
    lines
}

pub fn render_text(state: &NotesState) -> String {
    view_lines(state)
        .iter()
        .map(line_text)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Rows of the note list to show so the selection stays visible.
pub fn visible_window(len: usize, selected: usize, height: Option<u16>) -> Range<usize> {
    let Some(height) = height else {
        return 0..len;
    };
    let rows = usize::from(height.saturating_sub(RESERVED_ROWS).max(1));
    let start = (selected + 1).saturating_sub(rows);
    start..(start + rows).min(len)
}

fn list_lines(state: &NotesState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Sort: {}", state.sort_mode.label()),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];

    if state.notes.is_empty() {
        lines.push(Line::from("No notes. Press 'n' to create a note."));
    } else {
        let window = visible_window(
            state.notes.len(),
            state.selected_idx,
            state.size.map(|(_, height)| height),
        );
        for idx in window {
            lines.push(note_row(&state.notes[idx], idx == state.selected_idx));
        }
    }

    if let Some(pending) = &state.pending_delete {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Delete \"{}\"? Press 'd' again to confirm, 'esc' to cancel.",
                pending.display_title()
            ),
            Style::default().fg(WARNING).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn note_row(note: &Note, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("{SELECTED_MARKER}{}", note.display_title()),
            Style::default()
                .fg(LEAF_GREEN)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("{UNSELECTED_MARKER}{}", note.display_title()),
            Style::default().fg(HEADER_TEXT),
        ))
    }
}

fn read_lines(note: &Note) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            note.display_title().to_string(),
            Style::default().fg(LEAF_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(note.content.lines().map(|line| Line::from(line.to_string())));
    lines
}

fn edit_lines(state: &NotesState) -> Vec<Line<'static>> {
    let focus = state.focus();
    let mut lines = vec![label_line("Title:", focus == Some(Focus::Title))];
    lines.extend(field_lines(&state.title_field, "Enter your note title"));
    lines.push(Line::from(""));
    lines.push(label_line("Content:", focus == Some(Focus::Content)));
    lines.extend(field_lines(
        &state.content_field,
        "Write your note content here...",
    ));
    lines
}

fn search_lines(search: &SearchState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(LEAF_GREEN)),
            Span::raw(search.query.with_cursor_marker()),
        ]),
        Line::from(""),
    ];

    if search.query.is_empty() {
        lines.push(Line::from(Span::styled(
            "Type to search titles and content.",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if search.results.is_empty() {
        lines.push(Line::from("No matches."));
    } else {
        for (idx, note) in search.results.iter().enumerate() {
            lines.push(note_row(note, idx == search.selected));
        }
    }
    lines
}

fn create_lines(state: &NotesState, step: &CreateStep) -> Vec<Line<'static>> {
    match step {
        CreateStep::Title => {
            let mut lines = vec![label_line("Title:", true)];
            lines.extend(field_lines(&state.title_field, "Enter your note title"));
            lines
        }
        CreateStep::Content { draft } => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Title: ", Style::default().fg(MUTED_TEXT)),
                    Span::styled(
                        draft.title.clone(),
                        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                label_line("Content:", true),
            ];
            lines.extend(field_lines(
                &state.content_field,
                "Write your note content here...",
            ));
            lines
        }
    }
}

fn label_line(label: &'static str, focused: bool) -> Line<'static> {
    if focused {
        Line::from(Span::styled(
            format!("{FOCUS_MARKER}{label}"),
            Style::default().fg(LEAF_GREEN).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("{UNSELECTED_MARKER}{label}"),
            Style::default().fg(MUTED_TEXT),
        ))
    }
}

fn field_lines(field: &TextField, placeholder: &'static str) -> Vec<Line<'static>> {
    if field.is_empty() && !field.is_focused() {
        return vec![Line::from(Span::styled(
            format!("    {placeholder}"),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))];
    }
    let text = if field.is_focused() {
        field.with_cursor_marker()
    } else {
        field.value().to_string()
    };
    text.split('\n')
        .map(|line| Line::from(format!("    {line}")))
        .collect()
}
