//! Incremental tree builder.
//!
//! [`IncrementalBuilder`] accepts one character at a time. Characters are
//! grouped into lexemes by a [`LexemeBuffer`]; each finished lexeme is
//! classified and dispatched against the context stack, which may open,
//! extend or close constructs in the tree.
//!
//! The first error poisons the builder: every later `feed` or `finish`
//! returns that same error and the tree stops changing.

mod dispatch;

use jack_ir::{ConstructKind, ParseTree, Span};
use jack_lexer_core::{classify, LexemeBuffer, RawLexeme};
use tracing::{debug, trace};

use crate::error::{ParseError, StructuralErrorKind};
use crate::stack::ContextStack;

/// Streaming parser state.
#[derive(Clone, Debug)]
pub struct IncrementalBuilder {
    tree: ParseTree,
    stack: ContextStack,
    buffer: LexemeBuffer,
    /// Byte offset of the next character.
    offset: u32,
    failure: Option<ParseError>,
}

impl IncrementalBuilder {
    /// A builder with an empty tree and only the root open.
    pub fn new() -> Self {
        let tree = ParseTree::new();
        let stack = ContextStack::new(tree.root());
        IncrementalBuilder {
            tree,
            stack,
            buffer: LexemeBuffer::new(),
            offset: 0,
            failure: None,
        }
    }

    /// Process one character.
    ///
    /// Whitespace and symbols finish the buffered lexeme; the finished
    /// lexemes are dispatched before this returns.
    pub fn feed(&mut self, c: char) -> Result<(), ParseError> {
        self.check_poisoned()?;
        let offset = self.offset;
        self.offset = offset.saturating_add(char_len(c));
        for lexeme in self.buffer.push(c, offset) {
            self.process(lexeme)?;
        }
        Ok(())
    }

    /// Feed every character of `text`.
    pub fn feed_str(&mut self, text: &str) -> Result<(), ParseError> {
        text.chars().try_for_each(|c| self.feed(c))
    }

    /// Flush the last lexeme and hand back the tree.
    ///
    /// Fails if any construct other than the root is still open.
    pub fn finish(mut self) -> Result<ParseTree, ParseError> {
        self.check_poisoned()?;
        if let Some(lexeme) = self.buffer.finish() {
            self.process(lexeme)?;
        }
        if self.stack.depth() > 1 {
            let context = self.stack.peek_kind();
            return Err(ParseError::structural(
                StructuralErrorKind::Unclosed { context },
                Span::point(self.offset),
            ));
        }
        debug!(nodes = self.tree.node_count(), "parse complete");
        Ok(self.tree)
    }

    /// Number of open contexts, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Kinds of the open contexts, root first.
    pub fn open_contexts(&self) -> Vec<ConstructKind> {
        self.stack.kinds().collect()
    }

    /// The tree built so far.
    pub fn tree(&self) -> &ParseTree {
        &self.tree
    }

    /// The error that stopped this builder, if any.
    pub fn failure(&self) -> Option<&ParseError> {
        self.failure.as_ref()
    }

    fn check_poisoned(&self) -> Result<(), ParseError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Classify and dispatch one lexeme, recording any failure.
    fn process(&mut self, lexeme: RawLexeme) -> Result<(), ParseError> {
        let span = Span::with_len(lexeme.start, lexeme.len);
        let result = match classify(&lexeme.text) {
            Some(class) => {
                trace!(lexeme = %lexeme.text, %class, offset = span.start, "dispatch");
                self.dispatch(class, &lexeme.text, span)
            }
            None => Err(ParseError::Lexical {
                lexeme: lexeme.text,
                span,
            }),
        };
        if let Err(err) = &result {
            debug!(error = %err, open = ?self.open_contexts(), "parse failed");
            self.failure = Some(err.clone());
        }
        result
    }
}

impl Default for IncrementalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn char_len(c: char) -> u32 {
    // len_utf8 is at most 4
    c.len_utf8() as u32
}
