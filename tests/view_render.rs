//! What each mode shows, as plain text and through a ratatui test backend.

mod common;

use common::*;
use crossterm::event::KeyCode;
use leaf::ui::notes::{NotesIntent, NotesState};
use leaf::ui::render::draw;
use leaf::ui::view::{hints, render_text};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn three() -> NotesState {
    loaded(vec![
        note_at("Alpha", "first line\nsecond line", 0, 30),
        note_at("bravo", "", 0, 20),
        note_at("Charlie", "", 0, 10),
    ])
}

fn screen_text(state: &NotesState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, state)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn list_marks_selected_row() {
    let text = render_text(&step(three(), ch('j')).0);
    assert!(text.contains("  Alpha"));
    assert!(text.contains("> bravo"));
    assert!(text.contains("  Charlie"));
    assert!(text.contains("q: quit"));
}

#[test]
fn pending_delete_shows_confirmation_banner() {
    let text = render_text(&step(three(), ch('d')).0);
    assert!(text.contains("Delete \"Alpha\"? Press 'd' again to confirm, 'esc' to cancel."));
}

#[test]
fn error_banner_appears_in_every_mode() {
    let base = {
        let mut state = three();
        state.last_error = Some("boom".to_string());
        state
    };
    let states = [
        base.clone(),
        step(base.clone(), ch('r')).0,
        step(base.clone(), ch('e')).0,
        step(base.clone(), ch('/')).0,
        step(base.clone(), ch('n')).0,
    ];
    for state in states {
        let text = render_text(&state);
        assert!(
            text.lines().last() == Some("Error: boom"),
            "missing banner in {:?}: {text}",
            state.mode()
        );
    }
}

#[test]
fn view_mode_shows_title_and_content() {
    let text = render_text(&step(three(), ch('r')).0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Alpha");
    assert!(lines.contains(&"first line"));
    assert!(lines.contains(&"second line"));
}

#[test]
fn edit_mode_marks_focused_field_and_cursor() {
    let state = step(three(), ch('e')).0;
    let text = render_text(&state);
    assert!(text.contains("  Title:"));
    assert!(text.contains("▸ Content:"));
    assert!(text.contains("second line▌"));
    assert!(text.contains("    Alpha"));
}

#[test]
fn search_mode_prompts_then_reports_no_matches() {
    let state = step(three(), ch('/')).0;
    let text = render_text(&state);
    assert!(text.contains("Search: ▌"));
    assert!(text.contains("Type to search titles and content."));

    let (state, _) = step(state, ch('z'));
    let (state, _) = step(
        state,
        NotesIntent::SearchCompleted {
            query: "z".to_string(),
            result: Ok(vec![]),
        },
    );
    let text = render_text(&state);
    assert!(text.contains("Search: z▌"));
    assert!(text.contains("No matches."));
}

#[test]
fn create_mode_shows_each_step() {
    let state = step(NotesState::default(), ch('n')).0;
    assert!(render_text(&state).contains("▸ Title:"));
    assert_eq!(hints(&state), "enter: confirm title  esc: cancel");

    let (state, _) = run(state, [ch('G'), ch('o'), press(KeyCode::Enter)]);
    let text = render_text(&state);
    assert!(text.contains("Title: Go"));
    assert!(text.contains("▸ Content:"));
    assert_eq!(hints(&state), "ctrl+s: save  esc: back to title");
}

#[test]
fn long_list_scrolls_to_selection() {
    let notes = (0..20)
        .map(|i| note_at(&format!("note {i:02}"), "", 0, 100 - i))
        .collect();
    let mut state = loaded(notes);
    state = step(
        state,
        NotesIntent::Resize {
            width: 80,
            height: 16,
        },
    )
    .0;
    for _ in 0..10 {
        state = step(state, ch('j')).0;
    }
    let text = render_text(&state);
    assert!(text.contains("> note 10"));
    assert!(text.contains("  note 07"));
    assert!(!text.contains("note 06"));
    assert!(!text.contains("note 11"));
}

#[test]
fn frame_has_header_body_and_footer() {
    let text = screen_text(&three(), 120, 24);
    assert!(text.contains("Leaf"));
    assert!(text.contains("3 notes"));
    assert!(text.contains("> Alpha"));
    assert!(text.contains("q: quit"));
    assert!(text.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn frame_survives_tiny_terminal() {
    let text = screen_text(&three(), 10, 3);
    assert!(!text.is_empty());
}
