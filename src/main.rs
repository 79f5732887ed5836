//! floorscore -- floor-plan layout scoring over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.

use std::io::{self, BufRead};

use tracing::error;
use tracing_subscriber::EnvFilter;

use floorscore::engine::Engine;
use floorscore::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let written = match cmd {
            Command::Hello => engine.handle_hello(&mut out),
            Command::IsReady => engine.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::NewSession => {
                engine.new_session();
                Ok(())
            }
            Command::Evaluate { layout } => engine.handle_evaluate(&layout, &mut out),
            Command::Quit => break,
        };

        if let Err(e) = written {
            error!("failed to write response: {}", e);
            break;
        }
    }
}
