// repl.rs

use std::io::Write;
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Editor, CompletionType, Config};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::commands::COMMAND_TABLE;
use crate::completion::TriggerCompleter;
use crate::config::Settings;
use crate::console::{Console, CopyOutcome, Submission};
use crate::util::writeln_ignore_broken_pipe;

pub const BANNER: &str = "Welcome to OpenClaw Terminal v1.0.0\nType openclaw --help to get started";

#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    ClearScreen,
    Quit,
}

pub fn start_repl(settings: &Settings) -> Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .max_history_size(settings.max_line_history)?
        .auto_add_history(false)
        .build();
    let mut rl: Editor<TriggerCompleter, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(TriggerCompleter::new()));
    if let Some(path) = &settings.history_file {
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no line history loaded");
        }
    }

    let mut console = Console::new();
    let mut clipboard = SystemClipboard::new();
    let mut stdout = std::io::stdout();
    if settings.show_banner {
        writeln_ignore_broken_pipe(&mut stdout, BANNER)?;
    }
    loop {
        match rl.readline(&settings.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match handle_line(&mut console, &mut clipboard, &settings.prompt, &line, &mut stdout)? {
                    Control::Continue => {}
                    Control::ClearScreen => {
                        rl.clear_screen()?;
                        if settings.show_banner {
                            writeln_ignore_broken_pipe(&mut stdout, BANNER)?;
                        }
                    }
                    Control::Quit => break,
                }
                stdout.flush().ok();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    if let Some(path) = &settings.history_file {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not save line history");
        }
    }
    Ok(())
}

/// Runs one line of input against the console and writes what the user sees.
pub fn handle_line<W: Write>(
    console: &mut Console,
    clipboard: &mut dyn Clipboard,
    prompt: &str,
    line: &str,
    out: &mut W,
) -> Result<Control> {
    if let Some(meta) = line.trim().strip_prefix(':') {
        return handle_meta(console, clipboard, prompt, meta, out);
    }
    Ok(render(console.submit(line), out)?)
}

fn render<W: Write>(submission: Submission<'_>, out: &mut W) -> std::io::Result<Control> {
    match submission {
        Submission::Ignored => Ok(Control::Continue),
        Submission::Cleared => Ok(Control::ClearScreen),
        Submission::Resolved(entry) => {
            writeln_ignore_broken_pipe(&mut *out, &entry.output)?;
            writeln_ignore_broken_pipe(&mut *out, "")?;
            Ok(Control::Continue)
        }
    }
}

fn handle_meta<W: Write>(
    console: &mut Console,
    clipboard: &mut dyn Clipboard,
    prompt: &str,
    meta: &str,
    out: &mut W,
) -> Result<Control> {
    let tokens: Vec<&str> = meta.split_whitespace().collect();
    match tokens.as_slice() {
        ["quit"] => Ok(Control::Quit),
        ["copy"] => {
            let notice = match console.copy_transcript(clipboard) {
                CopyOutcome::Copied(_) => "Copied!".to_string(),
                CopyOutcome::Failed(e) => format!("Copy failed: {}", e),
            };
            writeln_ignore_broken_pipe(&mut *out, notice)?;
            Ok(Control::Continue)
        }
        ["quick"] => {
            for (i, entry) in COMMAND_TABLE.iter().enumerate() {
                writeln_ignore_broken_pipe(&mut *out, format!("{:>3}  {}", i + 1, entry.trigger))?;
            }
            Ok(Control::Continue)
        }
        ["run", n] => {
            let entry = n
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| COMMAND_TABLE.get(i));
            match entry {
                Some(entry) => {
                    writeln_ignore_broken_pipe(&mut *out, format!("{}{}", prompt, entry.trigger))?;
                    Ok(render(console.quick_run(entry.trigger), out)?)
                }
                None => {
                    writeln_ignore_broken_pipe(&mut *out, format!("usage: :run <1-{}>", COMMAND_TABLE.len()))?;
                    Ok(Control::Continue)
                }
            }
        }
        _ => {
            writeln_ignore_broken_pipe(&mut *out, format!("unknown console command: :{}", meta))?;
            Ok(Control::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::MemoryClipboard;
    use crate::commands::{output_for, FALLBACK_OUTPUT};
    use pretty_assertions::assert_eq;

    fn run(console: &mut Console, clipboard: &mut MemoryClipboard, line: &str) -> (Control, String) {
        let mut out = Vec::new();
        let control = handle_line(console, clipboard, "$ ", line, &mut out).unwrap();
        (control, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_resolved_output() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        let (control, text) = run(&mut console, &mut clipboard, "openclaw status");
        assert_eq!(control, Control::Continue);
        assert_eq!(text, format!("{}\n\n", output_for("openclaw status")));

        let (_, text) = run(&mut console, &mut clipboard, "hello");
        assert_eq!(text, format!("{}\n\n", FALLBACK_OUTPUT));
    }

    #[test]
    fn blank_line_prints_nothing() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(run(&mut console, &mut clipboard, "   "), (Control::Continue, String::new()));
        assert!(console.history().is_empty());
    }

    #[test]
    fn clear_requests_screen_clear() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        run(&mut console, &mut clipboard, "openclaw status");
        let (control, _) = run(&mut console, &mut clipboard, "Clear");
        assert_eq!(control, Control::ClearScreen);
        assert!(console.history().is_empty());
    }

    #[test]
    fn run_echoes_prompt_and_records_entry() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        let (_, text) = run(&mut console, &mut clipboard, ":run 4");
        assert_eq!(text, format!("$ openclaw --help\n{}\n\n", output_for("openclaw --help")));
        assert_eq!(console.history().len(), 1);
        assert_eq!(console.history().entries()[0].command, "openclaw --help");
    }

    #[test]
    fn run_rejects_bad_index() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        for line in [":run 0", ":run 5", ":run x", ":run"] {
            let (control, _) = run(&mut console, &mut clipboard, line);
            assert_eq!(control, Control::Continue);
        }
        assert!(console.history().is_empty());
    }

    #[test]
    fn quick_lists_table() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        let (_, text) = run(&mut console, &mut clipboard, ":quick");
        assert_eq!(text.lines().count(), COMMAND_TABLE.len());
        assert!(text.starts_with("  1  openclaw status\n"));
    }

    #[test]
    fn copy_reports_success_and_failure() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        run(&mut console, &mut clipboard, "openclaw agent list");
        let (_, text) = run(&mut console, &mut clipboard, ":copy");
        assert_eq!(text, "Copied!\n");
        assert_eq!(clipboard.contents, Some(console.transcript()));

        let mut broken = MemoryClipboard { fail: true, ..Default::default() };
        let (control, text) = run(&mut console, &mut broken, " :copy ");
        assert_eq!(control, Control::Continue);
        assert!(text.starts_with("Copy failed"));
        assert_eq!(console.history().len(), 1);
    }

    #[test]
    fn meta_commands_never_reach_table() {
        let mut console = Console::new();
        let mut clipboard = MemoryClipboard::default();
        let (_, text) = run(&mut console, &mut clipboard, ":status");
        assert_eq!(text, "unknown console command: :status\n");
        assert!(console.history().is_empty());
        assert_eq!(run(&mut console, &mut clipboard, ":quit").0, Control::Quit);
    }
}
