//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the main loop dispatches on.

use tracing::warn;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake; engine replies with its id, options and `hellook`.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset all options to their defaults.
    NewSession,

    /// Score a layout given as a single-line JSON object.
    Evaluate { layout: String },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newsession" => Some(Command::NewSession),

        "setoption" => parse_setoption(&tokens),
        "evaluate" => parse_evaluate(trimmed),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `evaluate <layout-json>`, capturing everything after the keyword.
fn parse_evaluate(full_line: &str) -> Option<Command> {
    let layout = full_line
        .strip_prefix("evaluate")
        .unwrap_or("")
        .trim()
        .to_string();
    if layout.is_empty() {
        warn!("malformed evaluate: expected 'evaluate <layout-json>'");
        return None;
    }
    Some(Command::Evaluate { layout })
}
