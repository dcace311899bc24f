use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Everything the app loop reacts to. `Tick` is synthesized by the
/// runner whenever the source stays quiet for a full tick interval, so
/// the loop never needs a separate timer thread.
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Seam between the app loop and wherever its events come from, so the
/// loop can be driven headlessly in tests.
pub trait EventSource: Send + 'static {
    /// Wait up to `timeout` for the next event; `None` means quiet.
    fn poll(&self, timeout: Duration) -> Option<AppEvent>;
}

/// Crossterm-backed source. A reader thread forwards key and resize
/// events and dies with the channel when the app side is dropped.
pub struct TerminalEvents {
    rx: Receiver<AppEvent>,
}

impl TerminalEvents {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(CtEvent::Key(key)) => tx.send(AppEvent::Key(key)),
                Ok(CtEvent::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl EventSource for TerminalEvents {
    fn poll(&self, timeout: Duration) -> Option<AppEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

/// Scripted source for headless tests: yields its queue in order, then
/// reports quiet immediately, which the runner turns into ticks.
pub struct ScriptedEvents {
    queue: Mutex<VecDeque<AppEvent>>,
}

impl ScriptedEvents {
    pub fn new<I: IntoIterator<Item = AppEvent>>(events: I) -> Self {
        Self {
            queue: Mutex::new(events.into_iter().collect()),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&self, _timeout: Duration) -> Option<AppEvent> {
        self.queue.lock().ok()?.pop_front()
    }
}

/// Pulls the app forward one event at a time.
pub struct Runner<E: EventSource> {
    source: E,
    tick_every: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(source: E, tick_every: Duration) -> Self {
        Self { source, tick_every }
    }

    /// Next event from the source, or `Tick` after a quiet interval.
    pub fn step(&self) -> AppEvent {
        self.source.poll(self.tick_every).unwrap_or(AppEvent::Tick)
    }
}
