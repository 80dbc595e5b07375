//! Scrolling log sink.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;

use crate::protocol::InboundEvent;

use super::EventSink;

// ============================================================================
// LogSink
// ============================================================================

/// An append-only ordered sequence of log lines.
///
/// Consumes `Log`, `Error` and `Malformed` events; ignores samples. Error
/// lines are prefixed with `Error: `, malformed frames with `?? ` so the raw
/// payload stays visible in the terminal.
///
/// The buffer is unbounded; hosts that need an eviction policy can call
/// [`clear`](Self::clear) on their own schedule.
#[derive(Debug, Default)]
pub struct LogSink {
    /// Ordered log lines, oldest first.
    lines: Vec<String>,
}

impl LogSink {
    /// Creates an empty log sink.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log sink behind a shared handle.
    #[inline]
    #[must_use]
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Returns the accumulated lines, oldest first.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of accumulated lines.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines have been accumulated.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops all accumulated lines.
    #[inline]
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl EventSink for LogSink {
    fn handle(&mut self, event: &InboundEvent) {
        match event {
            InboundEvent::Log { text } => self.lines.push(text.clone()),
            InboundEvent::Error { text } => self.lines.push(format!("Error: {text}")),
            InboundEvent::Malformed { raw } => self.lines.push(format!("?? {raw}")),
            InboundEvent::Sample { .. } => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
