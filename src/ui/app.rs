use crate::ui::events::AppEvent;
use crate::ui::input::key_intent;
use crate::ui::mvi::Reducer;
use crate::ui::notes::{FieldLimits, NotesCommand, NotesIntent, NotesReducer, NotesState, StoreCommand};
use crossterm::event::KeyEvent;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, commands) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        commands
    }};
}

/// Owns the notebook state and turns reducer commands into work for the
/// runtime. Store commands are handed back to the caller; `Quit` is
/// absorbed into [`App::should_quit`].
pub struct App {
    state: NotesState,
    should_quit: bool,
}

impl App {
    /// Fresh app plus the commands that must run before the first input.
    pub fn new(limits: FieldLimits) -> (Self, Vec<StoreCommand>) {
        let (state, commands) = NotesReducer::init(limits);
        let mut app = Self {
            state,
            should_quit: false,
        };
        let store_commands = app.absorb(commands);
        (app, store_commands)
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_event(&mut self, event: AppEvent) -> Vec<StoreCommand> {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Completed(intent) => self.dispatch(intent),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Vec<StoreCommand> {
        match key_intent(key) {
            Some(intent) => self.dispatch(intent),
            None => Vec::new(),
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) -> Vec<StoreCommand> {
        self.dispatch(NotesIntent::Resize {
            width: cols,
            height: rows,
        })
    }

    pub fn dispatch(&mut self, intent: NotesIntent) -> Vec<StoreCommand> {
        let commands = dispatch_mvi!(self, state, NotesReducer, intent);
        self.absorb(commands)
    }

    fn absorb(&mut self, commands: Vec<NotesCommand>) -> Vec<StoreCommand> {
        let mut store_commands = Vec::with_capacity(commands.len());
        for command in commands {
            match command {
                NotesCommand::Store(command) => store_commands.push(command),
                NotesCommand::Quit => self.should_quit = true,
            }
        }
        store_commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Note;
    use crate::ui::notes::Mode;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    fn make_app() -> App {
        App::new(FieldLimits::default()).0
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn startup_requests_initial_load() {
        let (app, commands) = App::new(FieldLimits::default());
        assert_eq!(commands, vec![StoreCommand::LoadAll]);
        assert!(!app.should_quit());
        assert_eq!(app.state().mode(), Mode::List);
    }

    #[test]
    fn quit_key_sets_flag_without_store_commands() {
        let mut app = make_app();
        let commands = app.on_key(press_key(KeyCode::Char('q')));
        assert!(commands.is_empty());
        assert!(app.should_quit());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = make_app();
        let mut release = press_key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        app.on_key(release);
        assert!(!app.should_quit());
    }

    #[test]
    fn resize_event_updates_size() {
        let mut app = make_app();
        app.on_event(AppEvent::Resize(120, 40));
        assert_eq!(app.state().size, Some((120, 40)));
    }

    #[test]
    fn completed_load_populates_notes() {
        let mut app = make_app();
        let commands = app.on_event(AppEvent::Completed(NotesIntent::NotesLoaded {
            result: Ok(vec![Note::new("One", ""), Note::new("Two", "")]),
        }));
        assert!(commands.is_empty());
        assert_eq!(app.state().notes.len(), 2);
    }

    #[test]
    fn confirmed_delete_is_handed_to_caller() {
        let mut app = make_app();
        let note = Note::new("Doomed", "");
        let id = note.id.clone();
        app.dispatch(NotesIntent::NotesLoaded {
            result: Ok(vec![note]),
        });
        assert!(app.on_key(press_key(KeyCode::Char('d'))).is_empty());
        assert_eq!(
            app.on_key(press_key(KeyCode::Char('d'))),
            vec![StoreCommand::Delete(id)]
        );
    }
}
