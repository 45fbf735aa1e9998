// console.rs

use crate::clipboard::{Clipboard, ClipboardError};
use crate::commands::{self, CLEAR_TOKEN};
use crate::history::{History, HistoryEntry};
use crate::transcript;

/// What a submission did to the scrollback.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission<'a> {
    /// Blank input, nothing recorded.
    Ignored,
    Cleared,
    Resolved(&'a HistoryEntry),
}

#[derive(Debug)]
pub enum CopyOutcome {
    Copied(String),
    /// The clipboard refused the write. History is untouched.
    Failed(ClipboardError),
}

/// The simulated terminal: scrollback plus the uncommitted input line.
#[derive(Debug, Default)]
pub struct Console {
    history: History,
    input: String,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submits whatever is in the input buffer, as the Enter key would.
    pub fn submit_input(&mut self) -> Submission<'_> {
        let raw = std::mem::take(&mut self.input);
        self.submit(&raw)
    }

    pub fn submit(&mut self, raw: &str) -> Submission<'_> {
        self.input.clear();
        let normalized = commands::normalize(raw);
        if normalized.is_empty() {
            return Submission::Ignored;
        }
        if normalized == CLEAR_TOKEN {
            tracing::info!(dropped = self.history.len(), "console cleared");
            self.history.clear();
            return Submission::Cleared;
        }
        let output = commands::output_for(&normalized);
        tracing::debug!(command = %normalized, matched = commands::resolve(&normalized).is_some(), "command submitted");
        // a submission is one line; terminators are not part of the command
        let command = raw.trim_matches(|c: char| c == '\r' || c == '\n');
        Submission::Resolved(self.history.push(HistoryEntry::new(command, output)))
    }

    /// Same as typing `trigger` and pressing Enter.
    pub fn quick_run(&mut self, trigger: &str) -> Submission<'_> {
        self.set_input(trigger);
        self.submit_input()
    }

    pub fn transcript(&self) -> String {
        transcript::render(self.history.entries())
    }

    pub fn copy_transcript(&self, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        let text = self.transcript();
        match clipboard.set_text(&text) {
            Ok(()) => CopyOutcome::Copied(text),
            Err(e) => {
                tracing::warn!(error = %e, "could not copy transcript");
                CopyOutcome::Failed(e)
            }
        }
    }
}
