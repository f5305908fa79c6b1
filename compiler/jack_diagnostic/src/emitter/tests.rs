use super::*;
use crate::ErrorCode;
use jack_ir::Span;
use pretty_assertions::assert_eq;

const SOURCE: &str = "class Main {\n    return );\n}\n";

fn unmatched_paren() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message("unmatched `)`")
        .with_label(Span::new(24, 25), "nothing to close here")
        .with_note("innermost open construct: returnStatement")
}

fn render(diag: &Diagnostic, with_source: bool, colors: bool) -> String {
    let mut output = Vec::new();
    {
        let mode = if colors { ColorMode::Always } else { ColorMode::Never };
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
        if with_source {
            emitter = emitter.with_source("Main.jack", SOURCE);
        }
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_snippet_rendering() {
    let text = render(&unmatched_paren(), true, false);
    assert_eq!(
        text,
        "error[E1002]: unmatched `)`\n \
         --> Main.jack:2:12\n  \
         |\n\
         2 |     return );\n  \
         |            ^ nothing to close here\n  \
         = note: innermost open construct: returnStatement\n\n"
    );
}

#[test]
fn test_without_source_uses_byte_span() {
    let text = render(&unmatched_paren(), false, false);
    assert!(text.starts_with("error[E1002]: unmatched `)`\n"));
    assert!(text.contains("--> 24..25: nothing to close here"));
}

#[test]
fn test_multi_char_underline() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("unrecognized lexeme `Main`")
        .with_label(Span::new(6, 10), "");
    let text = render(&diag, true, false);
    assert!(text.contains("1 | class Main {\n"));
    assert!(text.contains("  |       ^^^^\n"));
}

#[test]
fn test_end_of_input_point() {
    let end = u32::try_from(SOURCE.len()).unwrap();
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("input ended inside `class`")
        .with_label(Span::point(end), "expected `}`");
    let text = render(&diag, true, false);
    assert!(text.contains("--> Main.jack:4:1"));
    assert!(text.contains("^ expected `}`"));
}

#[test]
fn test_colors() {
    let text = render(&unmatched_paren(), true, true);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1002"));
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
