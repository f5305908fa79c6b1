//! Command handlers for the `jack` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! sources and reporting parse errors live here in the module root.

use jack_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use jack_ir::ParseTree;
use jack_parse::ParseError;

mod debug;
mod explain;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;

/// Read a source file, exiting with a readable message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Parse `source`, or render the error against it and exit.
fn parse_or_exit(path: &str, source: &str) -> ParseTree {
    match jack_parse::parse(source) {
        Ok(tree) => tree,
        Err(err) => {
            report_parse_error(path, source, &err);
            std::process::exit(1);
        }
    }
}

fn report_parse_error(path: &str, source: &str, err: &ParseError) {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), ColorMode::Auto, is_tty)
        .with_source(path, source);
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
}
