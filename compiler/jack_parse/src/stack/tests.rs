use super::*;
use jack_ir::{ParseTree, Span};
use pretty_assertions::assert_eq;

/// A tree with `root → class → subroutineDec` and a stack mirroring it.
fn open_function() -> (ParseTree, ContextStack) {
    let mut tree = ParseTree::new();
    let mut stack = ContextStack::new(tree.root());
    let class = tree.add_construct(tree.root(), ConstructKind::Class, Span::DUMMY);
    stack.push(class, ConstructKind::Class);
    let dec = tree.add_construct(class, ConstructKind::SubroutineDec, Span::DUMMY);
    stack.push(dec, ConstructKind::SubroutineDec);
    (tree, stack)
}

#[test]
fn new_stack_holds_root() {
    let tree = ParseTree::new();
    let stack = ContextStack::new(tree.root());
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.peek(), tree.root());
    assert_eq!(stack.peek_kind(), ConstructKind::Root);
}

#[test]
fn push_changes_top() {
    let (_, stack) = open_function();
    assert_eq!(stack.depth(), 3);
    assert!(stack.context_is(&[ConstructKind::SubroutineDec]));
    assert!(stack.context_is(&[ConstructKind::Term, ConstructKind::SubroutineDec]));
    assert!(!stack.context_is(&[ConstructKind::Class]));
}

#[test]
fn pop_one_and_many() {
    let (tree, mut stack) = open_function();
    assert_eq!(stack.pop(1), Ok(()));
    assert_eq!(stack.peek_kind(), ConstructKind::Class);
    assert_eq!(stack.pop(1), Ok(()));
    assert_eq!(stack.peek(), tree.root());

    let (_, mut stack) = open_function();
    assert_eq!(stack.pop(2), Ok(()));
    assert_eq!(stack.depth(), 1);
}

#[test]
fn pop_never_removes_root() {
    let (_, mut stack) = open_function();
    assert_eq!(
        stack.pop(3),
        Err(StackUnderflow {
            requested: 3,
            open: 2,
        })
    );
    // failed pop leaves the stack untouched
    assert_eq!(stack.depth(), 3);
    assert_eq!(stack.peek_kind(), ConstructKind::SubroutineDec);

    let tree = ParseTree::new();
    let mut stack = ContextStack::new(tree.root());
    assert!(stack.pop(1).is_err());
    assert_eq!(stack.depth(), 1);
}

#[test]
fn pop_zero_is_noop() {
    let (_, mut stack) = open_function();
    assert_eq!(stack.pop(0), Ok(()));
    assert_eq!(stack.depth(), 3);
}

#[test]
fn pop_if_matches_top_only() {
    let (_, mut stack) = open_function();
    assert!(!stack.pop_if(&[ConstructKind::Class]));
    assert_eq!(stack.depth(), 3);
    assert!(stack.pop_if(&[ConstructKind::Term, ConstructKind::SubroutineDec]));
    assert_eq!(stack.peek_kind(), ConstructKind::Class);
    assert!(stack.pop_if(&[ConstructKind::Class]));
    // the root is not in `open` and cannot match
    assert!(!stack.pop_if(&[ConstructKind::Root]));
    assert_eq!(stack.depth(), 1);
}

#[test]
fn kinds_run_root_outwards() {
    let (_, stack) = open_function();
    assert_eq!(
        stack.kinds().collect::<Vec<_>>(),
        vec![
            ConstructKind::Root,
            ConstructKind::Class,
            ConstructKind::SubroutineDec,
        ]
    );
}

#[test]
fn underflow_message() {
    let err = StackUnderflow {
        requested: 2,
        open: 0,
    };
    assert_eq!(
        err.to_string(),
        "cannot close 2 context(s): only 0 open above the root"
    );
}
