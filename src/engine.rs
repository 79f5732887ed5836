//! Engine state management.
//!
//! Holds the session's size policy between commands and writes protocol
//! responses for the main loop.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::layout::{evaluate_with_policy, Layout};
use crate::plan::SIZED_PROGRAM_TYPES;
use crate::policy::SizePolicy;
use crate::protocol::wire::format_response;

/// Prefix of the options that set a desired-size fraction, e.g. `Desired.WORK`.
pub const DESIRED_OPTION_PREFIX: &str = "Desired.";

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub policy: SizePolicy,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the default size policy.
    pub fn new() -> Self {
        Engine {
            policy: SizePolicy::default(),
        }
    }

    /// Resets the policy to its defaults.
    pub fn new_session(&mut self) {
        self.policy = SizePolicy::default();
    }

    /// Sets an engine option. `Desired.<TYPE>` options update the size
    /// policy; invalid values are logged and leave the policy unchanged.
    /// Other option names are ignored.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        let value = value.unwrap_or_default();
        match name.strip_prefix(DESIRED_OPTION_PREFIX) {
            Some(label) => {
                if let Err(e) = self.policy.apply_option(label, &value) {
                    warn!("setoption {}: {}", name, e);
                }
            }
            None => debug!("ignoring unknown option {}", name),
        }
    }

    /// Handles the handshake: writes id, options, protocol_version, and hellook.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name floorscore")?;
        writeln!(out, "id author floorscore")?;
        for program in SIZED_PROGRAM_TYPES {
            writeln!(
                out,
                "option name {}{} type float default 0 min 0",
                DESIRED_OPTION_PREFIX,
                program.label()
            )?;
        }
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "hellook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `evaluate`: scores the layout under the session policy and
    /// writes a `report` or `error` line.
    pub fn handle_evaluate<W: Write>(&self, layout_json: &str, out: &mut W) -> io::Result<()> {
        let result = Layout::from_json(layout_json)
            .and_then(|layout| evaluate_with_policy(&layout, &self.policy));
        if let Err(e) = &result {
            warn!("evaluate rejected layout: {}", e);
        }
        writeln!(out, "{}", format_response(&result))?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::ProgramType;

    const TWO_WORK: &str = r#"{"WORK": [[0, 0, 10, 10], [10, 0, 20, 10]]}"#;

    fn report_json(output: &[u8]) -> serde_json::Value {
        let s = String::from_utf8(output.to_vec()).unwrap();
        let line = s.lines().find(|l| l.starts_with("report ")).unwrap();
        serde_json::from_str(line.strip_prefix("report ").unwrap()).unwrap()
    }

    #[test]
    fn new_engine_has_default_policy() {
        let engine = Engine::new();
        assert_eq!(engine.policy, SizePolicy::default());
    }

    #[test]
    fn desired_option_updates_policy() {
        let mut engine = Engine::new();
        engine.set_option("Desired.WORK".to_string(), Some("0.5".to_string()));
        assert_eq!(engine.policy.fraction(ProgramType::Work), Some(0.5));
    }

    #[test]
    fn invalid_desired_option_is_ignored() {
        let mut engine = Engine::new();
        engine.set_option("Desired.LOBBY".to_string(), Some("0.5".to_string()));
        engine.set_option("Desired.WORK".to_string(), Some("lots".to_string()));
        engine.set_option("Desired.MEET".to_string(), None);
        assert_eq!(engine.policy, SizePolicy::default());
    }

    #[test]
    fn unrelated_option_is_ignored() {
        let mut engine = Engine::new();
        engine.set_option("Verbose".to_string(), Some("1".to_string()));
        assert_eq!(engine.policy, SizePolicy::default());
    }

    #[test]
    fn new_session_resets_policy() {
        let mut engine = Engine::new();
        engine.set_option("Desired.WORK".to_string(), Some("0.5".to_string()));
        engine.new_session();
        assert_eq!(engine.policy, SizePolicy::default());
    }

    #[test]
    fn handle_evaluate_writes_report() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_evaluate(TWO_WORK, &mut output).unwrap();
        let report = report_json(&output);
        assert_eq!(report["align_score"], 0.0);
        assert_eq!(report["work_ext_score"], 200);
        assert_eq!(report["hallway_access_score"], 2);
        assert_eq!(report["total_area"], 200);
    }

    #[test]
    fn handle_evaluate_uses_session_policy() {
        let mut engine = Engine::new();
        engine.set_option("Desired.WORK".to_string(), Some("0.25".to_string()));
        let mut output = Vec::new();
        engine.handle_evaluate(TWO_WORK, &mut output).unwrap();
        let report = report_json(&output);
        assert_eq!(report["desired_size"]["WORK"], 50.0);
        assert_eq!(report["size_score"]["WORK"], -150.0);
    }

    #[test]
    fn handle_evaluate_reports_errors() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_evaluate("{not json", &mut output).unwrap();
        let s = String::from_utf8(output).unwrap();
        assert!(s.starts_with("error malformed layout JSON"), "{}", s);

        let mut output = Vec::new();
        engine
            .handle_evaluate(r#"{"WORK": [[0, 0, -1, 1]]}"#, &mut output)
            .unwrap();
        let s = String::from_utf8(output).unwrap();
        assert!(s.starts_with("error invalid rectangle for room 0"), "{}", s);
    }

    #[test]
    fn handle_hello_outputs_handshake() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_hello(&mut output).unwrap();

        let s = String::from_utf8(output).unwrap();
        assert!(s.contains("id name floorscore"));
        assert!(s.contains("option name Desired.WORK type float"));
        assert!(s.contains("protocol_version 1"));
        assert_eq!(s.lines().last(), Some("hellook"));
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_isready(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().trim(), "readyok");
    }
}
