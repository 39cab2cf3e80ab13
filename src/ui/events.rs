use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::shutdown::ShutdownHandle;
use crate::ui::notes::NotesIntent;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Everything the runtime loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// A store command finished; carries its follow-up intent.
    Completed(NotesIntent),
}

pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Start the terminal input thread.
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let handler = Self::detached();
        let event_tx = handler.sender();

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            // Short poll so the shutdown flag is checked frequently.
            let ready = match event::poll(POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(error = %err, "terminal poll failed");
                    break;
                }
            };
            if !ready {
                continue;
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "terminal read failed");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        handler
    }

    /// Channel without an input thread; events arrive only via [`Self::sender`].
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
