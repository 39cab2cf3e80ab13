use crate::config::Config;
use crate::notes::SharedStore;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::dispatcher::CommandDispatcher;
use crate::ui::events::EventHandler;
use crate::ui::notes::StoreCommand;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// The closed loop: draw, wait for one event, reduce, dispatch commands.
///
/// Returns when the state machine quits, the event channel closes, or
/// shutdown is signaled from outside.
pub async fn run(config: &Config, store: SharedStore, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(shutdown.clone());
    let dispatcher = CommandDispatcher::new(store, events.sender());

    let (mut app, commands) = App::new(config.field_limits());
    dispatch_all(&dispatcher, commands);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        dispatch_all(&dispatcher, app.on_resize(cols, rows));
    }

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, app.state())) {
            break Err(err);
        }
        if app.should_quit() {
            tracing::info!("quit requested");
            break Ok(());
        }

        let event = tokio::select! {
            event = events.next() => event,
            _ = shutdown.wait() => None,
        };
        let Some(event) = event else {
            break Ok(());
        };
        dispatch_all(&dispatcher, app.on_event(event));
    };

    // Stops the input thread before the terminal leaves raw mode.
    shutdown.signal();
    guard.restore();
    result
}

fn dispatch_all(dispatcher: &CommandDispatcher, commands: Vec<StoreCommand>) {
    for command in commands {
        // Completion arrives as an event; the handle is not needed.
        drop(dispatcher.dispatch(command));
    }
}
