// commands.rs

/// A canned command: typing `trigger` prints `output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandEntry {
    pub trigger: &'static str,
    pub output: &'static str,
}

pub const CLEAR_TOKEN: &str = "clear";

pub const FALLBACK_OUTPUT: &str =
    "Command not found. Type \"openclaw --help\" for available commands.";

pub static COMMAND_TABLE: [CommandEntry; 4] = [
    CommandEntry {
        trigger: "openclaw status",
        output: "✓ OpenClaw Gateway: Running\n\
                 ✓ Agent Manager: Active\n\
                 ✓ Skills Loaded: 42\n\
                 ✓ Uptime: 5d 12h 34m",
    },
    CommandEntry {
        trigger: "openclaw agent list",
        output: "ID           TYPE           STATUS\n\
                 ----------------------------------------\n\
                 main         assistant      Active\n\
                 research     specialist     Idle\n\
                 dev          coder          Active\n\
                 security     guardian       Active",
    },
    CommandEntry {
        trigger: "openclaw skill install weather",
        output: "→ Checking dependencies...\n\
                 ✓ Dependencies satisfied\n\
                 → Downloading skill: weather\n\
                 ✓ Download complete\n\
                 → Installing...\n\
                 ✓ Skill installed successfully\n\
                 \n\
                 Usage: \"What's the weather like?\"",
    },
    CommandEntry {
        trigger: "openclaw --help",
        output: "OpenClaw CLI - AI Agent Framework\n\
                 \n\
                 Usage: openclaw [command] [options]\n\
                 \n\
                 Commands:\n\
                 \x20 status     Show system status\n\
                 \x20 agent      Manage agents\n\
                 \x20 skill      Manage skills\n\
                 \x20 gateway    Control gateway daemon\n\
                 \x20 config     View/edit configuration\n\
                 \x20 --help     Show this help message\n\
                 \n\
                 Options:\n\
                 \x20 -v, --verbose  Enable verbose logging\n\
                 \x20 --profile      Use specific profile",
    },
];

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Looks up an already-normalized command, first match in table order.
pub fn resolve(normalized: &str) -> Option<&'static str> {
    COMMAND_TABLE
        .iter()
        .find(|entry| entry.trigger == normalized)
        .map(|entry| entry.output)
}

pub fn output_for(normalized: &str) -> &'static str {
    resolve(normalized).unwrap_or(FALLBACK_OUTPUT)
}

pub fn triggers() -> impl Iterator<Item = &'static str> {
    COMMAND_TABLE.iter().map(|entry| entry.trigger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  OpenClaw STATUS \t"), "openclaw status");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn every_trigger_resolves_to_its_output() {
        for entry in COMMAND_TABLE.iter() {
            assert_eq!(resolve(entry.trigger), Some(entry.output));
            assert_eq!(output_for(&normalize(&entry.trigger.to_uppercase())), entry.output);
        }
    }

    #[test]
    fn unknown_command_falls_back() {
        assert_eq!(resolve("foo bar"), None);
        assert_eq!(output_for("foo bar"), FALLBACK_OUTPUT);
        // prefixes are not matches
        assert_eq!(resolve("openclaw"), None);
    }

    #[test]
    fn triggers_are_unique_and_normalized() {
        let all: Vec<&str> = triggers().collect();
        assert_eq!(all.len(), 4);
        for (i, t) in all.iter().enumerate() {
            assert_eq!(normalize(t), *t);
            assert!(!all[i + 1..].contains(t));
            assert_ne!(*t, CLEAR_TOKEN);
        }
    }

    #[test]
    fn help_output_keeps_indentation() {
        let help = output_for("openclaw --help");
        assert!(help.contains("\n  status     Show system status\n"));
        assert!(help.ends_with("  --profile      Use specific profile"));
    }

    #[test]
    fn skill_install_keeps_blank_line() {
        let out = output_for("openclaw skill install weather");
        assert!(out.contains("successfully\n\nUsage:"));
    }
}
