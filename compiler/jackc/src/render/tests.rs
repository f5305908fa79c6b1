use super::*;
use jack_parse::parse;
use pretty_assertions::assert_eq;

#[test]
fn empty_tree_is_one_line() {
    let tree = ParseTree::new();
    assert_eq!(render_tree(&tree, &DumpOptions::default()), "root\n");
}

#[test]
fn function_outline() {
    let tree = parse("class Main { function void f() { return; } }").unwrap();
    assert_eq!(
        render_tree(&tree, &DumpOptions::default()),
        "\
root
└─class
  ├─keyword class
  ├─identifier Main
  ├─symbol {
  ├─subroutineDec
  │ ├─keyword function
  │ ├─keyword void
  │ ├─identifier f
  │ ├─symbol (
  │ ├─parameterList
  │ ├─symbol )
  │ └─subroutineBody
  │   ├─symbol {
  │   ├─statements
  │   │ └─returnStatement
  │   │   ├─keyword return
  │   │   └─symbol ;
  │   └─symbol }
  └─symbol }
"
    );
}

#[test]
fn spans_follow_each_label() {
    let tree = parse("class{}").unwrap();
    let options = DumpOptions {
        show_spans: true,
        ..DumpOptions::default()
    };
    assert_eq!(
        render_tree(&tree, &options),
        "\
root @0..0
└─class @0..5
  ├─keyword class @0..5
  ├─symbol { @5..6
  └─symbol } @6..7
"
    );
}

#[test]
fn deep_nesting_renders() {
    let depth = 300;
    let source = format!(
        "class{{function void f(){{do g({}1{});}}}}",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let tree = parse(&source).unwrap();
    let out = render_tree(&tree, &DumpOptions::default());
    assert!(out.lines().any(|line| line.ends_with("integerConstant 1")));
    assert!(out.lines().count() > depth * 4);
}
