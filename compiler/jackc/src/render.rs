//! Box-drawing tree dump.
//!
//! ```text
//! root
//! └─class
//!   ├─keyword class
//!   ├─symbol {
//!   └─symbol }
//! ```

use jack_ir::{Node, NodeId, ParseTree};
use jack_stack::ensure_sufficient_stack;

use crate::DumpOptions;

/// Render the whole tree, one node per line.
pub fn render_tree(tree: &ParseTree, options: &DumpOptions) -> String {
    let mut printer = TreePrinter {
        tree,
        show_spans: options.show_spans,
        out: String::new(),
    };
    printer.node(tree.root().node(), "", None);
    printer.out
}

struct TreePrinter<'a> {
    tree: &'a ParseTree,
    show_spans: bool,
    out: String,
}

impl TreePrinter<'_> {
    /// `last` is `None` for the root, which gets no connector.
    fn node(&mut self, id: NodeId, indent: &str, last: Option<bool>) {
        ensure_sufficient_stack(|| {
            let child_indent = match last {
                None => String::new(),
                Some(true) => {
                    self.out.push_str(indent);
                    self.out.push_str("└─");
                    format!("{indent}  ")
                }
                Some(false) => {
                    self.out.push_str(indent);
                    self.out.push_str("├─");
                    format!("{indent}│ ")
                }
            };
            self.label(id);

            let tree = self.tree;
            let children = tree.children(id);
            for (i, &child) in children.iter().enumerate() {
                self.node(child, &child_indent, Some(i + 1 == children.len()));
            }
        });
    }

    fn label(&mut self, id: NodeId) {
        match self.tree.node(id) {
            Node::Construct { kind, .. } => self.out.push_str(kind.name()),
            Node::Terminal { kind, literal } => {
                self.out.push_str(kind.name());
                self.out.push(' ');
                self.out.push_str(literal);
            }
        }
        if self.show_spans {
            self.out.push_str(&format!(" @{}", self.tree.span(id)));
        }
        self.out.push('\n');
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
