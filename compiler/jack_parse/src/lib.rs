//! Single-pass parser for Jack.
//!
//! There is no token stream and no recursive descent. Source text is fed
//! one character at a time into an [`IncrementalBuilder`], which groups
//! characters into lexemes, classifies each one, and decides from the top
//! of an explicit [`ContextStack`] whether to open a construct, close one
//! or more, or append a leaf:
//!
//! ```text
//! chars → LexemeBuffer → classify → dispatch ⇄ ContextStack
//!                                       ↓
//!                                   ParseTree
//! ```
//!
//! The grammar covered is deliberately small: classes, `function`
//! declarations with parameter lists and bodies, `return` and `do`
//! statements, call argument lists, and expressions built from terms,
//! binary operators and parentheses.
//!
//! # Example
//!
//! ```
//! let tree = jack_parse::parse("class Main { function void f() { return; } }").unwrap();
//! assert_eq!(tree.children(tree.root().node()).len(), 1);
//! ```

mod builder;
mod error;
mod skeleton;
mod stack;

pub use builder::IncrementalBuilder;
pub use error::{ParseError, StructuralErrorKind};
pub use stack::{ContextStack, StackUnderflow};

use jack_ir::ParseTree;

/// Parse a whole source string, stopping at the first error.
pub fn parse(source: &str) -> Result<ParseTree, ParseError> {
    let mut builder = IncrementalBuilder::new();
    builder.feed_str(source)?;
    builder.finish()
}
