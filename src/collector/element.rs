//! Recursive collection over elements.

use tracing::trace;

use super::text::collect_text;
use super::{BreakHint, Context, Item};
use crate::node::{find_after, Element, Node};
use crate::tags::{classify, is_br, is_table_cell, is_table_row, Category};
use crate::whitespace::{infer_whitespace, Whitespace};

/// Run the collection steps for `siblings[index]`.
///
/// `siblings` is the child list of the node's parent; it is needed to tell
/// whether a row or cell is the last one.
#[must_use]
pub fn collect(node: &Node, siblings: &[Node], index: usize, context: Context) -> Vec<Item> {
    let mut items = Vec::new();
    collect_into(node, siblings, index, context, &mut items);
    items
}

/// Collect every child of a parent in order, appending to `items`.
///
/// The first child sees `prefix` as its break before, the last sees `suffix`
/// as its break after. A child followed by a `<br>` sees a boundary after it.
pub fn collect_children(
    children: &[Node],
    whitespace: Whitespace,
    prefix: BreakHint,
    suffix: BreakHint,
    items: &mut Vec<Item>,
) {
    for (index, child) in children.iter().enumerate() {
        let break_before = if index == 0 { prefix } else { BreakHint::None };
        let break_after = match children.get(index + 1) {
            Some(next) => BreakHint::boundary_if(is_br(next)),
            None => suffix,
        };

        let context = Context {
            whitespace,
            break_before,
            break_after,
        };
        collect_into(child, children, index, context, items);
    }
}

fn collect_into(node: &Node, siblings: &[Node], index: usize, context: Context, items: &mut Vec<Item>) {
    match node {
        Node::Element(element) => collect_element(node, element, siblings, index, context.whitespace, items),
        Node::Text { value } => {
            items.push(Item::Text(collect_text(
                value,
                context.whitespace,
                context.break_before.is_break(),
                context.break_after.is_break(),
            )));
        }
        // Comments below the top level are not rendered.
        Node::Root { .. } | Node::Comment { .. } | Node::Other => {}
    }
}

fn collect_element(
    node: &Node,
    element: &Element,
    siblings: &[Node],
    index: usize,
    inherited: Whitespace,
    items: &mut Vec<Item>,
) {
    let whitespace = infer_whitespace(node, inherited);
    let category = classify(node);

    if category == Category::NotRendered {
        trace!(tag = %element.tag_name, "skipping element that is not rendered");
        return;
    }

    // The break requirements are known before the children are visited, as
    // they change white-space handling at the edges of the content.
    let (prefix, suffix) = match category {
        Category::Br => (BreakHint::None, BreakHint::LineFeed),
        // Implicitly closed rows are not accounted for.
        Category::Row if find_after(siblings, index, is_table_row).is_some() => {
            (BreakHint::None, BreakHint::LineFeed)
        }
        Category::P => (BreakHint::Count(2), BreakHint::Count(2)),
        Category::BlockOrCaption => (BreakHint::Count(1), BreakHint::Count(1)),
        _ => (BreakHint::None, BreakHint::None),
    };

    items.extend(prefix.to_item());
    collect_children(&element.children, whitespace, prefix, suffix, items);

    if category == Category::Cell && find_after(siblings, index, is_table_cell).is_some() {
        items.push(Item::Text("\t".to_string()));
    }

    items.extend(suffix.to_item());
}
