//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade. Everything goes out at debug level so the console transcript
//! stays clean at the default `Warn` filter.

use log::debug;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                debug!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                debug!("STATE | {} -> {}", from.name(), to.name());
            }
            AppEvent::Pulse { index } => {
                debug!("PULSE | #{}", index + 1);
            }
            AppEvent::BootComplete(report) => match serde_json::to_string(report) {
                Ok(json) => debug!("BOOT  | {}", json),
                Err(e) => debug!("BOOT  | report not serialisable: {}", e),
            },
        }
    }
}
