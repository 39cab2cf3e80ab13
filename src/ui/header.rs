use crate::ui::notes::NotesState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LEAF_GREEN, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &NotesState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let count = match state.notes.len() {
            1 => "1 note".to_string(),
            n => format!("{n} notes"),
        };
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("🌱", Style::default().fg(LEAF_GREEN)),
            Span::styled("  ", text_style),
            Span::styled(
                "Leaf",
                Style::default().fg(LEAF_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(state.mode().label(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(count, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("sort: {}", state.sort_mode.label()), text_style),
        ];
        if state.last_error.is_some() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("⚠ error", Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
