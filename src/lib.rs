//! OpenClaw Terminal: a simulated command console with a canned command
//! table, scrollback history and transcript export.

pub mod clipboard;
pub mod commands;
pub mod completion;
pub mod config;
pub mod console;
pub mod history;
pub mod repl;
pub mod transcript;
pub mod util;
