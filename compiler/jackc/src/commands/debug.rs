//! Debug commands: `parse` and `lex` for inspecting the front end.

use jack_ir::Span;
use jack_lexer_core::{classify, split_lexemes};
use tracing::debug_span;

use super::{parse_or_exit, read_file};
use crate::{render_tree, tree_to_json, DumpOptions, OutputFormat};

/// Parse a file and print its tree.
pub fn parse_file(path: &str, options: &DumpOptions) {
    let _span = debug_span!("parse", path).entered();
    let content = read_file(path);
    let tree = parse_or_exit(path, &content);

    match options.format {
        OutputFormat::Tree => print!("{}", render_tree(&tree, options)),
        OutputFormat::Json => match tree_to_json(&tree, options) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error serializing tree for '{path}': {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Split a file into lexemes and print each with its class.
///
/// Lexemes that fit no class print as `error`; the dump never stops early.
pub fn lex_file(path: &str) {
    let _span = debug_span!("lex", path).entered();
    let content = read_file(path);
    let lexemes = split_lexemes(&content);

    println!("Lexemes for '{}' ({} lexemes):", path, lexemes.len());
    for lexeme in &lexemes {
        let class = classify(&lexeme.text).map_or("error", |class| class.name());
        let span = Span::with_len(lexeme.start, lexeme.len);
        println!("  {class:<16} {:<12} @ {span}", format!("{:?}", lexeme.text));
    }
}
