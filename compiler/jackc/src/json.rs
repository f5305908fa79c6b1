//! JSON tree dump.
//!
//! Constructs serialize as `{"kind", "children"}`, terminals as
//! `{"kind", "literal"}`. With spans enabled each object also carries
//! `"span": {"start", "end"}`.

use jack_ir::{Node, NodeId, ParseTree};
use jack_stack::ensure_sufficient_stack;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::DumpOptions;

/// Serialize the whole tree as pretty-printed JSON.
pub fn tree_to_json(tree: &ParseTree, options: &DumpOptions) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&NodeView {
        tree,
        id: tree.root().node(),
        spans: options.show_spans,
    })
}

/// Borrowed view of one node and its subtree.
struct NodeView<'a> {
    tree: &'a ParseTree,
    id: NodeId,
    spans: bool,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ensure_sufficient_stack(|| {
            let fields = 2 + usize::from(self.spans);
            match self.tree.node(self.id) {
                Node::Construct { kind, children } => {
                    let mut state = serializer.serialize_struct("Construct", fields)?;
                    state.serialize_field("kind", kind)?;
                    if self.spans {
                        state.serialize_field("span", &self.tree.span(self.id))?;
                    }
                    state.serialize_field(
                        "children",
                        &Children {
                            tree: self.tree,
                            ids: children,
                            spans: self.spans,
                        },
                    )?;
                    state.end()
                }
                Node::Terminal { kind, literal } => {
                    let mut state = serializer.serialize_struct("Terminal", fields)?;
                    state.serialize_field("kind", kind)?;
                    state.serialize_field("literal", literal)?;
                    if self.spans {
                        state.serialize_field("span", &self.tree.span(self.id))?;
                    }
                    state.end()
                }
            }
        })
    }
}

struct Children<'a> {
    tree: &'a ParseTree,
    ids: &'a [NodeId],
    spans: bool,
}

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ids.iter().map(|&id| NodeView {
            tree: self.tree,
            id,
            spans: self.spans,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
