// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::{Helper, Context};
use rustyline::hint::Hinter;
use rustyline::highlight::Highlighter;
use rustyline::validate::{Validator, ValidationContext, ValidationResult};
use rustyline::error::ReadlineError;
use crate::commands::{self, CLEAR_TOKEN};

pub const META_COMMANDS: [&str; 4] = [":copy", ":quick", ":run", ":quit"];

pub struct TriggerCompleter {
    candidates: Vec<&'static str>,
}

impl TriggerCompleter {
    pub fn new() -> Self {
        let mut candidates: Vec<&'static str> = commands::triggers()
            .chain(std::iter::once(CLEAR_TOKEN))
            .chain(META_COMMANDS)
            .collect();
        candidates.sort();
        candidates.dedup();
        Self { candidates }
    }

    /// Candidates for the text left of the cursor. Leading whitespace is kept
    /// in the line; matching is case-insensitive.
    pub fn matches(&self, prefix: &str) -> Vec<&'static str> {
        let wanted = prefix.trim_start().to_lowercase();
        self.candidates
            .iter()
            .copied()
            .filter(|c| c.starts_with(&wanted))
            .collect()
    }
}

impl Default for TriggerCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for TriggerCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        let completions: Vec<Pair> = self.matches(prefix).into_iter().map(|n| Pair {
            display: n.to_string(),
            replacement: n.to_string(),
        }).collect();
        Ok((start, completions))
    }
}

impl Hinter for TriggerCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for TriggerCompleter {}

impl Validator for TriggerCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for TriggerCompleter {}
