use super::*;
use pretty_assertions::assert_eq;

/// Helper: lexeme texts only.
fn texts(source: &str) -> Vec<String> {
    split_lexemes(source).into_iter().map(|l| l.text).collect()
}

#[test]
fn word_characters_accumulate() {
    let mut buf = LexemeBuffer::new();
    assert_eq!(buf.push('a', 0), Split::default());
    assert_eq!(buf.push('b', 1), Split::default());
    assert_eq!(
        buf.finish(),
        Some(RawLexeme {
            text: "ab".into(),
            start: 0,
            len: 2,
        })
    );
    assert_eq!(buf.finish(), None);
}

#[test]
fn whitespace_flushes_and_is_dropped() {
    let mut buf = LexemeBuffer::new();
    buf.push('d', 0);
    buf.push('o', 1);
    let split = buf.push(' ', 2);
    assert_eq!(split.flushed.map(|l| l.text), Some("do".to_string()));
    assert_eq!(split.symbol, None);
    assert_eq!(buf.push('\n', 3), Split::default());
}

#[test]
fn symbol_flushes_then_emits_itself() {
    let mut buf = LexemeBuffer::new();
    buf.push('f', 0);
    let lexemes: Vec<_> = buf.push('(', 1).into_iter().collect();
    assert_eq!(
        lexemes,
        vec![
            RawLexeme {
                text: "f".into(),
                start: 0,
                len: 1,
            },
            RawLexeme {
                text: "(".into(),
                start: 1,
                len: 1,
            },
        ]
    );
    assert_eq!(buf.finish(), None);
}

#[test]
fn split_is_whitespace_insensitive() {
    assert_eq!(
        texts("class{function void f(){return;}}"),
        texts("class {\n  function void f() {\r\n    return;\n  }\n}\n")
    );
}

#[test]
fn split_example_program() {
    assert_eq!(
        texts("do Output.printInt(1+23);"),
        vec!["do", "Output", ".", "printInt", "(", "1", "+", "23", ")", ";"]
    );
}

#[test]
fn trailing_run_is_a_lexeme() {
    assert_eq!(texts("return x"), vec!["return", "x"]);
}

#[test]
fn malformed_run_stays_one_lexeme() {
    assert_eq!(texts("3x+y"), vec!["3x", "+", "y"]);
}

#[test]
fn offsets_are_bytes() {
    let lexemes = split_lexemes("é x");
    assert_eq!(lexemes[0].start, 0);
    assert_eq!(lexemes[0].len, 2);
    assert_eq!(lexemes[1].start, 3);
    assert_eq!(lexemes[1].len, 1);
}

#[test]
fn empty_and_blank_sources() {
    assert!(split_lexemes("").is_empty());
    assert!(split_lexemes(" \t\r\n").is_empty());
}
