use rs_inner_text::{hast_json_to_text, Error, Node, Options, PropertyValue, Whitespace};

fn text(json: &str) -> String {
    hast_json_to_text(json, &Options::default()).expect("valid hast")
}

#[test]
fn root_with_paragraphs() {
    let json = r#"{
        "type": "root",
        "children": [
            {"type": "element", "tagName": "p", "properties": {}, "children": [{"type": "text", "value": "Delta"}]},
            {"type": "text", "value": "\n"},
            {"type": "element", "tagName": "p", "properties": {}, "children": [{"type": "text", "value": "Echo"}]}
        ]
    }"#;
    assert_eq!(text(json), "Delta\n\nEcho");
}

#[test]
fn positions_doctypes_and_unknown_nodes_are_tolerated() {
    let json = r#"{
        "type": "root",
        "children": [
            {"type": "doctype", "position": {"start": {"line": 1, "column": 1, "offset": 0}}},
            {"type": "element", "tagName": "span", "children": [
                {"type": "text", "value": "Foxtrot", "position": {"start": {"line": 1, "column": 16, "offset": 15}}},
                {"type": "mdxJsxTextElement", "name": "Custom"}
            ]}
        ]
    }"#;
    assert_eq!(text(json), "Foxtrot");
}

#[test]
fn properties_drive_rendering() {
    let json = r#"{
        "type": "element",
        "tagName": "div",
        "children": [
            {"type": "element", "tagName": "p", "properties": {"hidden": true}, "children": [{"type": "text", "value": "Golf"}]},
            {"type": "element", "tagName": "dialog", "properties": {"open": ""}, "children": [{"type": "text", "value": "Hotel"}]},
            {"type": "element", "tagName": "pre", "properties": {"wrap": 1}, "children": [{"type": "text", "value": " India "}]}
        ]
    }"#;
    assert_eq!(text(json), " India ");
}

#[test]
fn property_values_keep_their_shape() {
    let json = r#"{"type": "element", "tagName": "td", "properties": {"className": ["a", "b"], "colSpan": 2, "noWrap": null}}"#;
    let node: Node = serde_json::from_str(json).expect("valid hast");
    let properties = &node.as_element().expect("element").properties;

    assert_eq!(
        properties.get("className"),
        Some(&PropertyValue::List(vec!["a".into(), "b".into()]))
    );
    assert_eq!(properties.get("colSpan"), Some(&PropertyValue::Number(2.0)));
    assert!(!properties.is_truthy("noWrap"));
}

#[test]
fn options_are_applied() {
    let json = r#"{"type": "root", "children": [{"type": "text", "value": "  Juliett  "}]}"#;
    let options = Options {
        whitespace: Whitespace::PreWrap,
    };
    assert_eq!(hast_json_to_text(json, &options).ok().as_deref(), Some("  Juliett  "));
    assert_eq!(text(json), " Juliett ");
}

#[test]
fn invalid_json_is_an_error() {
    let result = hast_json_to_text(r#"{"type": "element", "children": []}"#, &Options::default());
    assert!(matches!(result, Err(Error::Json(_))));

    let result = hast_json_to_text("not json", &Options::default());
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn serializes_in_hast_shape() {
    let node = Node::element("p", vec![Node::text("Kilo")]);
    let json = serde_json::to_value(&node).expect("serializable");
    assert_eq!(json["type"], "element");
    assert_eq!(json["tagName"], "p");
    assert_eq!(json["children"][0]["value"], "Kilo");
}
