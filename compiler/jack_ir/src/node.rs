//! Node IDs and node kinds for the flat parse tree.

use std::fmt;

/// Index into the parse tree arena.
///
/// 4 bytes, O(1) equality, no ownership: the arena owns every node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Handle to a construct (non-terminal) node.
///
/// Only [`ParseTree`](crate::ParseTree) hands these out, and only for
/// construct nodes. Every API that attaches children takes a `ConstructId`,
/// which is how "terminal nodes never have children" is enforced.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ConstructId(NodeId);

impl ConstructId {
    #[inline]
    pub(crate) const fn from_node(id: NodeId) -> Self {
        ConstructId(id)
    }

    /// The underlying node ID.
    #[inline]
    pub const fn node(self) -> NodeId {
        self.0
    }
}

impl fmt::Debug for ConstructId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstructId({})", self.0.raw())
    }
}

impl From<ConstructId> for NodeId {
    #[inline]
    fn from(id: ConstructId) -> Self {
        id.0
    }
}

/// Grammar constructs: every node kind that can hold children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ConstructKind {
    Root,
    Class,
    SubroutineDec,
    ParameterList,
    SubroutineBody,
    Statements,
    ReturnStatement,
    DoStatement,
    ExpressionList,
    Expression,
    Term,
}

impl ConstructKind {
    /// The grammar name of this construct, as it appears in tree dumps.
    pub const fn name(self) -> &'static str {
        match self {
            ConstructKind::Root => "root",
            ConstructKind::Class => "class",
            ConstructKind::SubroutineDec => "subroutineDec",
            ConstructKind::ParameterList => "parameterList",
            ConstructKind::SubroutineBody => "subroutineBody",
            ConstructKind::Statements => "statements",
            ConstructKind::ReturnStatement => "returnStatement",
            ConstructKind::DoStatement => "doStatement",
            ConstructKind::ExpressionList => "expressionList",
            ConstructKind::Expression => "expression",
            ConstructKind::Term => "term",
        }
    }

    /// Statement constructs are the ones a `;` terminates.
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            ConstructKind::ReturnStatement | ConstructKind::DoStatement
        )
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Leaf kinds: nodes that carry literal text and never have children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TerminalKind {
    Keyword,
    Symbol,
    Identifier,
    IntegerConstant,
}

impl TerminalKind {
    /// The grammar name of this terminal, as it appears in tree dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TerminalKind::Keyword => "keyword",
            TerminalKind::Symbol => "symbol",
            TerminalKind::Identifier => "identifier",
            TerminalKind::IntegerConstant => "integerConstant",
        }
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parse tree node.
///
/// Tagged variant: constructs own an ordered list of child IDs, terminals
/// own their literal text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Node {
    Construct {
        kind: ConstructKind,
        children: Vec<NodeId>,
    },
    Terminal {
        kind: TerminalKind,
        literal: String,
    },
}

impl Node {
    /// Grammar name of the node's kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Node::Construct { kind, .. } => kind.name(),
            Node::Terminal { kind, .. } => kind.name(),
        }
    }

    /// Literal text for terminals, `None` for constructs.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Node::Construct { .. } => None,
            Node::Terminal { literal, .. } => Some(literal),
        }
    }

    /// Child IDs in source order (always empty for terminals).
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Construct { children, .. } => children,
            Node::Terminal { .. } => &[],
        }
    }

    /// Construct kind, if this is a construct.
    pub const fn construct_kind(&self) -> Option<ConstructKind> {
        match self {
            Node::Construct { kind, .. } => Some(*kind),
            Node::Terminal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
