//! Low-level lexing for Jack.
//!
//! Two pieces, both free of any tree or parser types:
//!
//! - [`classify`] maps a finished lexeme to a [`TokenClass`].
//! - [`LexemeBuffer`] turns a character stream into lexemes: maximal runs of
//!   word characters, or single symbol characters. Whitespace separates
//!   lexemes and is otherwise dropped.
//!
//! The parser drives a [`LexemeBuffer`] one character at a time; tools that
//! just want the lexemes of a whole string can call [`split_lexemes`].

mod buffer;
mod classify;

pub use buffer::{split_lexemes, LexemeBuffer, RawLexeme, Split};
pub use classify::{char_class, classify, CharClass, TokenClass, KEYWORDS, SYMBOLS};
