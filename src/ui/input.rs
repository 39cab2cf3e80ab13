use crate::ui::notes::NotesIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Turn a terminal key event into a reducer intent.
///
/// Only presses are forwarded; repeats and releases (reported by terminals
/// with the kitty keyboard protocol) are dropped.
pub fn key_intent(key: KeyEvent) -> Option<NotesIntent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    Some(NotesIntent::Key(key))
}

pub fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// `needle` typed without Ctrl or Alt.
pub fn is_plain_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch == needle) && !has_command_modifier(key)
}

/// A named key (`Esc`, `Enter`, arrows, ...) without Ctrl or Alt.
pub fn is_key(key: KeyEvent, code: KeyCode) -> bool {
    key.code == code && !has_command_modifier(key)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn release_events_are_dropped() {
        let mut release = key(KeyCode::Char('n'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(key_intent(release).is_none());
        assert!(key_intent(key(KeyCode::Char('n'), KeyModifiers::NONE)).is_some());
    }

    #[test]
    fn ctrl_char_matches_either_case() {
        assert!(is_ctrl_char(key(KeyCode::Char('s'), KeyModifiers::CONTROL), 's'));
        assert!(is_ctrl_char(key(KeyCode::Char('S'), KeyModifiers::CONTROL), 's'));
        assert!(!is_ctrl_char(key(KeyCode::Char('s'), KeyModifiers::NONE), 's'));
    }

    #[test]
    fn plain_char_rejects_ctrl_and_allows_shift() {
        assert!(!is_plain_char(key(KeyCode::Char('d'), KeyModifiers::CONTROL), 'd'));
        assert!(is_plain_char(key(KeyCode::Char('/'), KeyModifiers::SHIFT), '/'));
    }
}
