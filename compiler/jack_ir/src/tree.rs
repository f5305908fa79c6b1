//! Arena-backed parse tree.
//!
//! [`ParseTree`] stores nodes in parallel arrays indexed by [`NodeId`]:
//!
//! - `nodes`: the tagged node payload (children or literal)
//! - `spans`: source span of the lexeme that created the node
//!
//! Nodes are only ever created through [`ParseTree::add_construct`] and
//! [`ParseTree::add_terminal`], both of which attach the new node to its
//! parent in the same step. The root is node 0 and is created by
//! [`ParseTree::new`].

use crate::{ConstructId, ConstructKind, Node, NodeId, Span, TerminalKind};

/// Index of the root node in every tree.
const ROOT: NodeId = NodeId::new(0);

/// A parse tree with exactly one root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseTree {
    nodes: Vec<Node>,
    spans: Vec<Span>,
}

impl ParseTree {
    /// Create a tree holding only the root node.
    pub fn new() -> Self {
        ParseTree {
            nodes: vec![Node::Construct {
                kind: ConstructKind::Root,
                children: Vec::new(),
            }],
            spans: vec![Span::DUMMY],
        }
    }

    /// The root construct.
    #[inline]
    pub const fn root(&self) -> ConstructId {
        ConstructId::from_node(ROOT)
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a construct node and append it to `parent`'s children.
    pub fn add_construct(
        &mut self,
        parent: ConstructId,
        kind: ConstructKind,
        span: Span,
    ) -> ConstructId {
        debug_assert_ne!(kind, ConstructKind::Root, "a tree has exactly one root");
        let id = self.alloc(
            parent,
            Node::Construct {
                kind,
                children: Vec::new(),
            },
            span,
        );
        ConstructId::from_node(id)
    }

    /// Allocate a terminal node and append it to `parent`'s children.
    pub fn add_terminal(
        &mut self,
        parent: ConstructId,
        kind: TerminalKind,
        literal: impl Into<String>,
        span: Span,
    ) -> NodeId {
        self.alloc(
            parent,
            Node::Terminal {
                kind,
                literal: literal.into(),
            },
            span,
        )
    }

    fn alloc(&mut self, parent: ConstructId, node: Node, span: Span) -> NodeId {
        let raw = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("parse tree exceeded {} nodes", u32::MAX));
        let id = NodeId::new(raw);
        self.nodes.push(node);
        self.spans.push(span);
        match &mut self.nodes[parent.node().index()] {
            Node::Construct { children, .. } => children.push(id),
            Node::Terminal { .. } => unreachable!("ConstructId always refers to a construct"),
        }
        id
    }

    /// Get a node.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Kind of a construct node.
    pub fn construct_kind(&self, id: ConstructId) -> ConstructKind {
        match &self.nodes[id.node().index()] {
            Node::Construct { kind, .. } => *kind,
            Node::Terminal { .. } => unreachable!("ConstructId always refers to a construct"),
        }
    }

    /// Children of a node in source order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.index()].children()
    }

    /// Span of the lexeme that created the node.
    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.index()]
    }

    /// Pre-order walk of `id` and everything beneath it.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            pending: vec![id],
        }
    }

    /// Compact single-line rendering, used by tests and debug output.
    ///
    /// Constructs print as `kind[child child ...]`, terminals as
    /// `kind"literal"`:
    ///
    /// ```text
    /// returnStatement[keyword"return" symbol";"]
    /// ```
    pub fn outline(&self, id: NodeId) -> String {
        enum Step {
            Enter(NodeId),
            Exit,
        }

        let mut out = String::new();
        let mut work = vec![Step::Enter(id)];
        let mut first_in_group = true;

        while let Some(step) = work.pop() {
            match step {
                Step::Enter(current) => {
                    if !first_in_group {
                        out.push(' ');
                    }
                    match self.node(current) {
                        Node::Terminal { kind, literal } => {
                            out.push_str(kind.name());
                            out.push_str(&format!("{literal:?}"));
                            first_in_group = false;
                        }
                        Node::Construct { kind, children } => {
                            out.push_str(kind.name());
                            out.push('[');
                            work.push(Step::Exit);
                            work.extend(children.iter().rev().map(|&c| Step::Enter(c)));
                            first_in_group = true;
                        }
                    }
                }
                Step::Exit => {
                    out.push(']');
                    first_in_group = false;
                }
            }
        }
        out
    }
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over a subtree. See [`ParseTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a ParseTree,
    pending: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.pending.pop()?;
        self.pending
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
