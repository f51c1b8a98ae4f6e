//! Tag catalogs and node classification.
//!
//! Provides both arrays (for iteration) and `HashSet`s (for O(1) lookup), plus
//! the tag/attribute predicates the collector branches on.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::node::{Element, Node};

// === Tag Lists (arrays for iteration) ===

/// Elements whose content is never rendered.
///
/// From <https://html.spec.whatwg.org/#hidden-elements>. `noscript` is listed
/// because we act as if scripting were supported. Void elements are left out
/// as they have no text.
pub static NOT_RENDERED_TAGS: [&str; 10] = [
    "datalist", "head", "noembed", "noframes", "noscript", "rp", "script", "style", "template",
    "title",
];

/// Elements that are block-level or `table-caption` in the user agent stylesheet.
///
/// From <https://html.spec.whatwg.org/#the-css-user-agent-style-sheet-and-presentational-hints>.
pub static BLOCK_OR_CAPTION_TAGS: [&str; 39] = [
    // Page
    "html", "body",
    // Flow content
    "address", "blockquote", "center", "dialog", "div", "figure", "figcaption", "footer", "form",
    "header", "hr", "legend", "listing", "main", "p", "plaintext", "pre", "xmp",
    // Sections and headings
    "article", "aside", "h1", "h2", "h3", "h4", "h5", "h6", "hgroup", "nav", "section",
    // Lists
    "dd", "dir", "dl", "dt", "menu", "ol", "ul",
    // `table-caption`
    "caption",
];

/// Table cell tags: th, td
pub static CELL_TAGS: [&str; 2] = ["th", "td"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `NOT_RENDERED_TAGS` as a `HashSet`
pub static NOT_RENDERED_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NOT_RENDERED_TAGS.into_iter().collect());

/// `BLOCK_OR_CAPTION_TAGS` as a `HashSet`
pub static BLOCK_OR_CAPTION_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_OR_CAPTION_TAGS.into_iter().collect());

// === Classification ===

/// What the collector does with an element, in priority order.
///
/// A tag can belong to several catalogs (`p` is also block-level); the
/// classifier returns the first category that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Not rendered: the element and its descendants contribute nothing.
    NotRendered,
    /// `<br>`
    Br,
    /// `<tr>`
    Row,
    /// `<th>` or `<td>`
    Cell,
    /// `<p>`
    P,
    /// Other block-level or `table-caption` elements.
    BlockOrCaption,
    /// Inline content and everything else.
    Other,
}

/// Classify a node with the predicates below. Non-elements are `Other`.
#[must_use]
pub fn classify(node: &Node) -> Category {
    if !is_rendered(node) {
        Category::NotRendered
    } else if is_br(node) {
        Category::Br
    } else if is_table_row(node) {
        Category::Row
    } else if is_table_cell(node) {
        Category::Cell
    } else if is_p(node) {
        Category::P
    } else if is_block_or_caption(node) {
        Category::BlockOrCaption
    } else {
        Category::Other
    }
}

fn is_element_rendered(element: &Element) -> bool {
    !(NOT_RENDERED_TAG_SET.contains(element.tag_name.as_str())
        || element.properties.is_truthy("hidden")
        || is_closed_dialog(element))
}

/// `<dialog>` without a truthy `open` property.
fn is_closed_dialog(element: &Element) -> bool {
    element.tag_name == "dialog" && !element.properties.is_truthy("open")
}

/// Whether the node takes part in rendering. Non-elements always do.
#[must_use]
pub fn is_rendered(node: &Node) -> bool {
    node.as_element().is_none_or(is_element_rendered)
}

#[must_use]
pub fn is_block_or_caption(node: &Node) -> bool {
    node.tag_name()
        .is_some_and(|tag| BLOCK_OR_CAPTION_TAG_SET.contains(tag))
}

#[must_use]
pub fn is_br(node: &Node) -> bool {
    node.tag_name() == Some("br")
}

#[must_use]
pub fn is_p(node: &Node) -> bool {
    node.tag_name() == Some("p")
}

#[must_use]
pub fn is_table_row(node: &Node) -> bool {
    node.tag_name() == Some("tr")
}

#[must_use]
pub fn is_table_cell(node: &Node) -> bool {
    node.tag_name().is_some_and(|tag| CELL_TAGS.contains(&tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Properties;

    fn element(tag: &str, properties: Properties) -> Node {
        Node::element_with(tag, properties, vec![])
    }

    #[test]
    fn tag_sets_match_arrays() {
        assert_eq!(NOT_RENDERED_TAG_SET.len(), NOT_RENDERED_TAGS.len());
        assert_eq!(BLOCK_OR_CAPTION_TAG_SET.len(), BLOCK_OR_CAPTION_TAGS.len());
    }

    #[test]
    fn head_section_elements_are_not_rendered() {
        for tag in ["head", "script", "style", "template", "title", "noscript"] {
            assert_eq!(classify(&element(tag, Properties::new())), Category::NotRendered, "{tag}");
        }
    }

    #[test]
    fn hidden_property_wins_over_tag() {
        let hidden = Properties::new().with("hidden", true);
        assert_eq!(classify(&element("br", hidden.clone())), Category::NotRendered);
        assert_eq!(classify(&element("p", hidden)), Category::NotRendered);
    }

    #[test]
    fn dialog_is_rendered_only_when_open() {
        assert_eq!(classify(&element("dialog", Properties::new())), Category::NotRendered);
        assert_eq!(
            classify(&element("dialog", Properties::new().with("open", false))),
            Category::NotRendered
        );
        assert_eq!(
            classify(&element("dialog", Properties::new().with("open", true))),
            Category::BlockOrCaption
        );
    }

    #[test]
    fn paragraph_is_p_before_block() {
        let p = Node::element("p", vec![]);
        assert_eq!(classify(&element("p", Properties::new())), Category::P);
        assert!(is_p(&p));
        assert!(is_block_or_caption(&p));
    }

    #[test]
    fn table_parts() {
        assert_eq!(classify(&element("tr", Properties::new())), Category::Row);
        assert_eq!(classify(&element("td", Properties::new())), Category::Cell);
        assert_eq!(classify(&element("th", Properties::new())), Category::Cell);
        assert_eq!(classify(&element("caption", Properties::new())), Category::BlockOrCaption);
        assert_eq!(classify(&element("table", Properties::new())), Category::Other);
        assert!(is_table_row(&Node::element("tr", vec![])));
        assert!(is_table_cell(&Node::element("th", vec![])));
        assert!(!is_table_cell(&Node::element("tr", vec![])));
    }

    #[test]
    fn inline_and_non_elements() {
        assert_eq!(classify(&element("span", Properties::new())), Category::Other);
        assert!(is_rendered(&Node::text("x")));
        assert!(is_rendered(&Node::Other));
        assert_eq!(classify(&Node::text("p")), Category::Other);
        assert!(!is_rendered(&element("title", Properties::new())));
        assert!(!is_block_or_caption(&Node::root(vec![])));
        assert!(!is_br(&Node::text("br")));
    }
}
