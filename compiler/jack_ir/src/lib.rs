//! Jack IR - Parse Tree Types
//!
//! This crate contains the core data structures shared by the Jack front end:
//! - Spans for source locations
//! - Node kinds (constructs and terminals)
//! - The arena-backed [`ParseTree`]
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes live in one arena and refer to each other
//!   through `NodeId(u32)` indices, never through owning pointers.
//! - **Attach on Create**: a node is attached to its parent at the moment it
//!   is allocated, so the arena is a strict tree by construction.
//! - **Typed Handles**: children can only be attached through a
//!   [`ConstructId`], so terminal nodes can never gain children.

mod node;
mod span;
mod tree;

pub use node::{ConstructId, ConstructKind, Node, NodeId, TerminalKind};
pub use span::Span;
pub use tree::{Descendants, ParseTree};
