//! Diagnostic system for error reporting.
//!
//! A [`Diagnostic`] carries:
//! - an error code for searchability (`jack --explain E1002`)
//! - a message (what went wrong)
//! - a primary label (where it went wrong)
//! - notes (why, and what the parser was doing)
//!
//! Front-end errors convert themselves into diagnostics; the
//! [`emitter::TerminalEmitter`] renders them against the source text.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod line_index;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
pub use line_index::{LineCol, LineIndex};
