use super::*;
use pretty_assertions::assert_eq;

#[test]
fn construct_names_match_grammar() {
    let names: Vec<&str> = [
        ConstructKind::Root,
        ConstructKind::Class,
        ConstructKind::SubroutineDec,
        ConstructKind::ParameterList,
        ConstructKind::SubroutineBody,
        ConstructKind::Statements,
        ConstructKind::ReturnStatement,
        ConstructKind::DoStatement,
        ConstructKind::ExpressionList,
        ConstructKind::Expression,
        ConstructKind::Term,
    ]
    .iter()
    .map(|k| k.name())
    .collect();

    assert_eq!(
        names,
        vec![
            "root",
            "class",
            "subroutineDec",
            "parameterList",
            "subroutineBody",
            "statements",
            "returnStatement",
            "doStatement",
            "expressionList",
            "expression",
            "term",
        ]
    );
}

#[test]
fn terminal_names_match_grammar() {
    assert_eq!(TerminalKind::Keyword.to_string(), "keyword");
    assert_eq!(TerminalKind::Symbol.to_string(), "symbol");
    assert_eq!(TerminalKind::Identifier.to_string(), "identifier");
    assert_eq!(TerminalKind::IntegerConstant.to_string(), "integerConstant");
}

#[test]
fn only_return_and_do_are_statements() {
    assert!(ConstructKind::ReturnStatement.is_statement());
    assert!(ConstructKind::DoStatement.is_statement());
    assert!(!ConstructKind::Statements.is_statement());
    assert!(!ConstructKind::Class.is_statement());
    assert!(!ConstructKind::Expression.is_statement());
}

#[test]
fn terminal_has_no_children() {
    let node = Node::Terminal {
        kind: TerminalKind::Identifier,
        literal: "x".to_string(),
    };
    assert!(node.children().is_empty());
    assert_eq!(node.literal(), Some("x"));
    assert_eq!(node.construct_kind(), None);
    assert_eq!(node.name(), "identifier");
}

#[test]
fn construct_has_no_literal() {
    let node = Node::Construct {
        kind: ConstructKind::Term,
        children: vec![NodeId::new(3)],
    };
    assert_eq!(node.construct_kind(), Some(ConstructKind::Term));
    assert_eq!(node.literal(), None);
    assert_eq!(node.children(), &[NodeId::new(3)]);
    assert_eq!(node.name(), "term");
}

#[test]
fn node_id_roundtrips_index() {
    let id = NodeId::new(7);
    assert_eq!(id.index(), 7);
    assert_eq!(id.raw(), 7);
    assert_eq!(format!("{id:?}"), "NodeId(7)");
}
