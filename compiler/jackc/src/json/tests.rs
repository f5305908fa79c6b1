use super::*;
use jack_parse::parse;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn to_value(source: &str, show_spans: bool) -> Value {
    let tree = parse(source).unwrap();
    let options = DumpOptions {
        show_spans,
        ..DumpOptions::default()
    };
    serde_json::from_str(&tree_to_json(&tree, &options).unwrap()).unwrap()
}

#[test]
fn nested_objects() {
    assert_eq!(
        to_value("class A {}", false),
        json!({
            "kind": "root",
            "children": [{
                "kind": "class",
                "children": [
                    { "kind": "keyword", "literal": "class" },
                    { "kind": "identifier", "literal": "A" },
                    { "kind": "symbol", "literal": "{" },
                    { "kind": "symbol", "literal": "}" },
                ],
            }],
        })
    );
}

#[test]
fn spans_when_requested() {
    let value = to_value("class{}", true);
    assert_eq!(value["span"], json!({ "start": 0, "end": 0 }));
    let class = &value["children"][0];
    assert_eq!(class["span"], json!({ "start": 0, "end": 5 }));
    assert_eq!(class["children"][1]["span"], json!({ "start": 5, "end": 6 }));
}

#[test]
fn construct_kinds_are_camel_case() {
    let value = to_value("class{function void f(){do g(1);}}", false);
    let dec = &value["children"][0]["children"][2];
    assert_eq!(dec["kind"], "subroutineDec");
    let body = &dec["children"][6];
    assert_eq!(body["kind"], "subroutineBody");
    let statement = &body["children"][1]["children"][0];
    assert_eq!(statement["kind"], "doStatement");
    let constant = &statement["children"][3]["children"][0]["children"][0]["children"][0];
    assert_eq!(constant, &json!({ "kind": "integerConstant", "literal": "1" }));
}

#[test]
fn empty_tree() {
    assert_eq!(to_value("", false), json!({ "kind": "root", "children": [] }));
}
