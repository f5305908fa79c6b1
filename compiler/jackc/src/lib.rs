//! The Jack front end CLI library.
//!
//! The `jack` binary is a thin argument dispatcher over [`commands`]. The
//! output formats ([`render_tree`], [`tree_to_json`]) and option parsing
//! ([`parse_dump_options`]) live here so they can be tested without
//! spawning the binary.

pub mod commands;
mod json;
mod options;
mod render;
mod tracing_setup;

pub use json::tree_to_json;
pub use options::{parse_dump_options, DumpOptions, OptionsError, OutputFormat};
pub use render::render_tree;
pub use tracing_setup::init_tracing;
