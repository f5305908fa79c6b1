//! Character-at-a-time lexeme buffering.
//!
//! Per character `c`:
//! 1. symbol or whitespace with a non-empty buffer: the buffered run is
//!    finished and handed back;
//! 2. whitespace is dropped;
//! 3. a symbol is handed back as its own one-character lexeme;
//! 4. anything else extends the buffer.
//!
//! A run still buffered at end of input is a complete lexeme; call
//! [`LexemeBuffer::finish`] to take it.

use crate::classify::{char_class, CharClass};

/// A finished lexeme and where it came from.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawLexeme {
    pub text: String,
    /// Byte offset of the first character.
    pub start: u32,
    /// Byte length.
    pub len: u32,
}

/// Lexemes finished by a single [`LexemeBuffer::push`].
///
/// At most two: the run that the character terminated, then the character
/// itself when it is a symbol. Iterating yields them in that order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Split {
    pub flushed: Option<RawLexeme>,
    pub symbol: Option<RawLexeme>,
}

impl IntoIterator for Split {
    type Item = RawLexeme;
    type IntoIter = std::iter::Chain<
        std::option::IntoIter<RawLexeme>,
        std::option::IntoIter<RawLexeme>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.flushed.into_iter().chain(self.symbol)
    }
}

/// Pending run of word characters.
#[derive(Clone, Debug, Default)]
pub struct LexemeBuffer {
    pending: String,
    start: u32,
}

impl LexemeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one character located at byte `offset`.
    pub fn push(&mut self, c: char, offset: u32) -> Split {
        match char_class(c) {
            CharClass::Whitespace => Split {
                flushed: self.finish(),
                symbol: None,
            },
            CharClass::Symbol => Split {
                flushed: self.finish(),
                symbol: Some(RawLexeme {
                    text: c.to_string(),
                    start: offset,
                    len: char_len(c),
                }),
            },
            CharClass::Word => {
                if self.pending.is_empty() {
                    self.start = offset;
                }
                self.pending.push(c);
                Split::default()
            }
        }
    }

    /// Take the buffered run, if any, leaving the buffer empty.
    pub fn finish(&mut self) -> Option<RawLexeme> {
        if self.pending.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.pending);
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        Some(RawLexeme {
            text,
            start: self.start,
            len,
        })
    }
}

#[inline]
fn char_len(c: char) -> u32 {
    // len_utf8 is at most 4
    c.len_utf8() as u32
}

/// Split a whole source string into lexemes.
pub fn split_lexemes(source: &str) -> Vec<RawLexeme> {
    let mut buffer = LexemeBuffer::new();
    let mut lexemes = Vec::new();
    for (offset, c) in source.char_indices() {
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        lexemes.extend(buffer.push(c, offset));
    }
    lexemes.extend(buffer.finish());
    lexemes
}

#[cfg(test)]
mod tests;
