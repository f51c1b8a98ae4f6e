//! Top-level text assembly.

use tracing::debug;

use crate::collector::{collect_children, collect_text, BreakHint, Item};
use crate::node::Node;
use crate::options::Options;
use crate::tags::is_block_or_caption;
use crate::whitespace::{infer_whitespace, Whitespace};

/// Main entry point: the rendered text of `node`.
///
/// Text and comment nodes return their own value with normal white-space
/// processing, as if bounded by breaks. This deviates from the DOM, where the
/// node's `.data` would be returned. Everything else is handled as an element,
/// so roots work too and nodes without children yield the empty string.
///
/// The node's own rendering status is not checked: a `<title>` passed in
/// directly yields its text.
pub(crate) fn to_text(node: &Node, options: &Options) -> String {
    if let Node::Text { value } | Node::Comment { value } = node {
        return collect_text(value, Whitespace::Normal, true, true);
    }

    let children = node.children();
    let edge = BreakHint::boundary_if(is_block_or_caption(node));
    let whitespace = infer_whitespace(node, options.whitespace);

    let mut items = Vec::new();
    collect_children(children, whitespace, edge, edge, &mut items);

    let text = join_items(&items);
    debug!(
        children = children.len(),
        items = items.len(),
        chars = text.len(),
        "collected rendered text"
    );
    text
}

/// Reconcile collected items into the final string.
///
/// - Empty strings are removed.
/// - Runs of required line break counts at the start or end are removed.
/// - Each remaining run becomes as many line feeds as its largest count.
/// - Strings and forced line feeds are joined with no separator.
fn join_items(items: &[Item]) -> String {
    let mut result = String::new();
    // `None` until the first string is emitted, so leading counts are dropped.
    let mut pending_breaks: Option<u8> = None;

    for item in items {
        match item {
            Item::Required(count) => {
                if let Some(pending) = pending_breaks.as_mut() {
                    *pending = (*pending).max(*count);
                }
            }
            Item::LineFeed => {
                flush_breaks(&mut result, &mut pending_breaks);
                result.push('\n');
            }
            Item::Text(text) => {
                if text.is_empty() {
                    continue;
                }
                flush_breaks(&mut result, &mut pending_breaks);
                result.push_str(text);
            }
        }
    }

    result
}

fn flush_breaks(result: &mut String, pending_breaks: &mut Option<u8>) {
    if let Some(count) = pending_breaks.filter(|count| *count > 0) {
        result.push_str(&"\n".repeat(usize::from(count)));
    }
    *pending_breaks = Some(0);
}
