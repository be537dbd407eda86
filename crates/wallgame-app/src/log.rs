//! Append-only notification feed.

/// Human-readable status lines, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationLog {
    lines: Vec<String>,
}

impl NotificationLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(%line, "notification");
        self.lines.push(line);
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if nothing was logged yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
