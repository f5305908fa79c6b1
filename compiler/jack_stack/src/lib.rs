//! Stack safety for recursive tree walks.
//!
//! The parser itself never recurses: nesting lives on its explicit context
//! stack. Consumers of the finished tree (the tree printer, the JSON dump)
//! are naturally recursive, and a source with thousands of nested
//! parentheses produces a tree just as deep. Wrap each recursive step in
//! [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn render(&mut self, id: NodeId) {
//!     ensure_sufficient_stack(|| {
//!         for &child in self.tree.children(id) {
//!             self.render(child);
//!         }
//!     })
//! }
//! ```
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
