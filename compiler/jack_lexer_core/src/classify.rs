//! Lexeme and character classification.

use std::fmt;

/// Reserved words. Exact, case-sensitive match.
pub const KEYWORDS: [&str; 5] = ["class", "function", "void", "return", "do"];

/// Single-character symbols. Every symbol is one character long.
pub const SYMBOLS: [char; 19] = [
    '{', '}', '(', ')', '[', ']', '.', ',', ';', '+', '-', '*', '/', '&', '|', '<', '>', '=', '~',
];

/// Category of a finished lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenClass {
    Keyword,
    Symbol,
    Identifier,
    IntegerConstant,
}

impl TokenClass {
    pub const fn name(self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::Symbol => "symbol",
            TokenClass::Identifier => "identifier",
            TokenClass::IntegerConstant => "integerConstant",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the lexeme buffer treats a single character.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CharClass {
    /// Separates lexemes, never part of one.
    Whitespace,
    /// A complete one-character lexeme; also ends any pending run.
    Symbol,
    /// Accumulates into the pending run.
    Word,
}

/// Classify one character.
#[inline]
pub fn char_class(c: char) -> CharClass {
    if matches!(c, ' ' | '\t' | '\n' | '\r') {
        CharClass::Whitespace
    } else if SYMBOLS.contains(&c) {
        CharClass::Symbol
    } else {
        CharClass::Word
    }
}

/// Classify a finished lexeme.
///
/// Rules are tried in order: keyword, symbol, identifier
/// (`[A-Za-z_][A-Za-z0-9_]*`), integer constant (`[0-9]+`). Anything else,
/// including the empty string, returns `None`.
pub fn classify(lexeme: &str) -> Option<TokenClass> {
    if KEYWORDS.contains(&lexeme) {
        return Some(TokenClass::Keyword);
    }

    let mut chars = lexeme.chars();
    let first = chars.next()?;

    if chars.as_str().is_empty() && SYMBOLS.contains(&first) {
        return Some(TokenClass::Symbol);
    }

    if (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Some(TokenClass::Identifier);
    }

    if lexeme.bytes().all(|b| b.is_ascii_digit()) {
        return Some(TokenClass::IntegerConstant);
    }

    None
}
