//! Line protocol handling.
//!
//! One command per input line, one or more response lines per command.
//! Layouts travel as single-line JSON objects and reports come back the
//! same way.

pub mod parser;
pub mod wire;

pub use parser::{parse_command, Command};
pub use wire::{encode_report, format_error, format_response};
