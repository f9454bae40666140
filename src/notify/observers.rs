//! Stock observers.

use super::{Observer, ObserverError};
use std::sync::Mutex;
use tracing::info;

/// Logs every message as `"{name} notified: {message}"`.
#[derive(Debug, Clone)]
pub struct LogObserver {
    name: String,
}

impl LogObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for LogObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&self, message: &str) -> Result<(), ObserverError> {
        info!("{} notified: {}", self.name, message);
        Ok(())
    }
}

/// Keeps every message it receives, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    name: String,
    messages: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the transcript so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Observer for RecordingObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&self, message: &str) -> Result<(), ObserverError> {
        self.messages
            .lock()
            .map_err(|_| ObserverError(format!("{} transcript lock poisoned", self.name)))?
            .push(message.to_string());
        Ok(())
    }
}
