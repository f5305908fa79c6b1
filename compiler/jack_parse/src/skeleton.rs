//! Keyword-introduced constructs.
//!
//! `class`, `function`, `return` and `do` each open a construct whose first
//! child is the keyword itself. Every call builds a fresh node; nothing is
//! shared between instances.

use jack_ir::{ConstructId, ConstructKind, ParseTree, Span, TerminalKind};

/// The construct a keyword opens, if any.
pub(crate) fn keyword_construct(keyword: &str) -> Option<ConstructKind> {
    match keyword {
        "class" => Some(ConstructKind::Class),
        "function" => Some(ConstructKind::SubroutineDec),
        "return" => Some(ConstructKind::ReturnStatement),
        "do" => Some(ConstructKind::DoStatement),
        _ => None,
    }
}

/// Attach a new `kind` construct under `parent`, headed by `keyword`.
pub(crate) fn instantiate(
    tree: &mut ParseTree,
    parent: ConstructId,
    kind: ConstructKind,
    keyword: &str,
    span: Span,
) -> ConstructId {
    let id = tree.add_construct(parent, kind, span);
    tree.add_terminal(id, TerminalKind::Keyword, keyword, span);
    id
}
