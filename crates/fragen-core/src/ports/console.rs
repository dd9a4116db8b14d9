//! Diagnostic console port.
//!
//! The pre-request hook reports what it generated through this trait rather
//! than printing directly.

use std::sync::Mutex;

/// Trait for emitting human-readable diagnostic lines.
///
/// # Implementations
///
/// - `TracingConsole` - Routes lines to `tracing` at info level
/// - `MemoryConsole` - Collects lines for later inspection
/// - `NoopConsole` - Discards everything
#[cfg_attr(test, mockall::automock)]
pub trait ConsoleSink: Send + Sync {
    /// Write one line.
    fn log(&self, line: &str);
}

/// Console that forwards each line to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl ConsoleSink for TracingConsole {
    fn log(&self, line: &str) {
        tracing::info!(target: "fragen::console", "{line}");
    }
}

/// A no-op console for tests and quiet contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConsole;

impl NoopConsole {
    /// Create a new no-op console.
    pub const fn new() -> Self {
        Self
    }
}

impl ConsoleSink for NoopConsole {
    fn log(&self, _line: &str) {
        // Intentionally do nothing
    }
}

/// Console that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl ConsoleSink for MemoryConsole {
    fn log(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_console_collects_lines() {
        let console = MemoryConsole::new();
        console.log("first");
        console.log("second");
        assert_eq!(console.lines(), ["first", "second"]);
    }

    #[test]
    fn test_noop_and_tracing_consoles() {
        // Should not panic without a subscriber installed
        NoopConsole::new().log("ignored");
        TracingConsole.log("traced");
    }

    #[test]
    fn test_arc_console() {
        let console: Arc<dyn ConsoleSink> = Arc::new(MemoryConsole::new());
        console.log("shared");
    }
}
