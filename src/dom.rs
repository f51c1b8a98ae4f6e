//! HTML input adapter.
//!
//! Parses HTML with the `dom_query` crate and converts the result into a
//! [`Node`] tree the collector can walk.

pub use dom_query::{Document, NodeRef};

use crate::node::{Element, Node, Properties};

/// HTML boolean attributes the collector consults, with their hast property names.
///
/// Presence of the attribute makes the property `true`, whatever its value.
const BOOLEAN_ATTRIBUTES: [(&str, &str); 4] = [
    ("hidden", "hidden"),
    ("open", "open"),
    ("wrap", "wrap"),
    ("nowrap", "noWrap"),
];

/// Parse an HTML document into a `Root` node.
///
/// # Example
///
/// ```rust
/// use rs_inner_text::{dom, to_text};
///
/// let node = dom::from_html("<p>Delta</p><p>Echo</p>");
/// assert_eq!(to_text(&node), "Delta\n\nEcho");
/// ```
#[must_use]
pub fn from_html(html: &str) -> Node {
    from_document(&Document::from(html))
}

/// Convert an already parsed document into a `Root` node.
#[must_use]
pub fn from_document(document: &Document) -> Node {
    Node::root(convert_children(&document.root()))
}

/// Convert a single parsed node and its descendants.
///
/// Elements and text map to their counterparts. Comments, doctypes and
/// everything else become [`Node::Other`].
#[must_use]
pub fn from_node_ref(node: &NodeRef<'_>) -> Node {
    if node.is_element() {
        let tag_name = node
            .node_name()
            .map(|name| name.to_ascii_lowercase())
            .unwrap_or_default();

        let mut properties = Properties::new();
        for (attribute, property) in BOOLEAN_ATTRIBUTES {
            if node.has_attr(attribute) {
                properties.insert(property, true);
            }
        }

        Node::Element(Element {
            tag_name,
            properties,
            children: convert_children(node),
        })
    } else if node.is_text() {
        Node::text(node.text().to_string())
    } else {
        Node::Other
    }
}

fn convert_children(node: &NodeRef<'_>) -> Vec<Node> {
    node.children().iter().map(from_node_ref).collect()
}
