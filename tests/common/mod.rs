//! Tree builders shared by the integration tests.

#![allow(dead_code)]

use rs_inner_text::{Node, Properties};

/// Element with children.
pub fn h(tag: &str, children: Vec<Node>) -> Node {
    Node::element(tag, children)
}

/// Element with properties and children.
pub fn hp(tag: &str, properties: Properties, children: Vec<Node>) -> Node {
    Node::element_with(tag, properties, children)
}

/// Element with a single text child.
pub fn ht(tag: &str, value: &str) -> Node {
    Node::element(tag, vec![Node::text(value)])
}

pub fn t(value: &str) -> Node {
    Node::text(value)
}

pub fn br() -> Node {
    Node::element("br", vec![])
}
