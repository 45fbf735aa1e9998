// history.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// What the user typed, before normalization.
    pub command: String,
    pub output: String,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self { command: command.into(), output: output.into() }
    }
}

/// Scrollback. Append-only apart from `clear`.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
