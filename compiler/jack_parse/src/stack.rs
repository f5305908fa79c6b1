//! The context stack: which constructs are currently open.
//!
//! Replaces the call stack of a recursive descent parser. The bottom entry
//! is always the root; it is stored apart from the open frames so no
//! sequence of pops can remove it.

use jack_ir::{ConstructId, ConstructKind};

/// A pop asked for more frames than sit above the root.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("cannot close {requested} context(s): only {open} open above the root")]
pub struct StackUnderflow {
    pub requested: usize,
    pub open: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Frame {
    id: ConstructId,
    kind: ConstructKind,
}

/// Ordered, never-empty stack of open constructs.
#[derive(Clone, Debug)]
pub struct ContextStack {
    root: Frame,
    open: Vec<Frame>,
}

impl ContextStack {
    /// A stack holding only `root`.
    pub fn new(root: ConstructId) -> Self {
        ContextStack {
            root: Frame {
                id: root,
                kind: ConstructKind::Root,
            },
            open: Vec::new(),
        }
    }

    /// Make `id` the innermost open construct.
    pub fn push(&mut self, id: ConstructId, kind: ConstructKind) {
        self.open.push(Frame { id, kind });
    }

    /// Close the `n` innermost constructs.
    ///
    /// Fails without touching the stack if that would remove the root.
    pub fn pop(&mut self, n: usize) -> Result<(), StackUnderflow> {
        if n > self.open.len() {
            return Err(StackUnderflow {
                requested: n,
                open: self.open.len(),
            });
        }
        self.open.truncate(self.open.len() - n);
        Ok(())
    }

    /// Close the innermost construct if it is one of `kinds`.
    ///
    /// Returns whether a frame was popped. The root is never popped.
    pub fn pop_if(&mut self, kinds: &[ConstructKind]) -> bool {
        match self.open.last() {
            Some(top) if kinds.contains(&top.kind) => {
                self.open.pop();
                true
            }
            _ => false,
        }
    }

    /// The innermost open construct.
    #[inline]
    pub fn peek(&self) -> ConstructId {
        self.top().id
    }

    /// Kind of the innermost open construct.
    #[inline]
    pub fn peek_kind(&self) -> ConstructKind {
        self.top().kind
    }

    /// True if the innermost construct is any of `kinds`.
    #[inline]
    pub fn context_is(&self, kinds: &[ConstructKind]) -> bool {
        kinds.contains(&self.peek_kind())
    }

    /// Number of entries, root included. Never zero.
    #[inline]
    pub fn depth(&self) -> usize {
        self.open.len() + 1
    }

    /// Kinds from the root outwards.
    pub fn kinds(&self) -> impl Iterator<Item = ConstructKind> + '_ {
        std::iter::once(self.root.kind).chain(self.open.iter().map(|f| f.kind))
    }

    #[inline]
    fn top(&self) -> Frame {
        self.open.last().copied().unwrap_or(self.root)
    }
}

#[cfg(test)]
mod tests;
