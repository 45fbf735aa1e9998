// transcript.rs

use itertools::Itertools;
use crate::history::HistoryEntry;

const PROMPT: &str = "$ ";
const ENTRY_SEPARATOR: &str = "\n\n";

pub fn render(entries: &[HistoryEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}{}\n{}", PROMPT, e.command, e.output))
        .join(ENTRY_SEPARATOR)
}

/// Splits a rendered transcript back into entries. Outputs may contain blank
/// lines, but not a blank line followed by a line starting with `$ `.
pub fn parse(text: &str) -> Vec<HistoryEntry> {
    let body = match text.strip_prefix(PROMPT) {
        Some(body) => body,
        None => return Vec::new(),
    };
    let delimiter = format!("{}{}", ENTRY_SEPARATOR, PROMPT);
    body.split(delimiter.as_str())
        .map(|block| match block.split_once('\n') {
            Some((command, output)) => HistoryEntry::new(command, output),
            None => HistoryEntry::new(block, ""),
        })
        .collect()
}
