//! Rendered text collection.
//!
//! Implements the inner text collection steps of
//! <https://html.spec.whatwg.org/#the-innertext-idl-attribute> over [`Node`]
//! trees, acting as if every node is being rendered by a CSS user agent with
//! the default stylesheet.
//!
//! # Module Structure
//!
//! - `text`: white-space processing of a single text value
//! - `element`: the recursive walk producing [`Item`]s
//!
//! The items are reconciled into a string by [`crate::to_text_with_options`].
//!
//! [`Node`]: crate::Node

pub mod element;
pub mod text;

pub use element::{collect, collect_children};
pub use text::collect_text;

use crate::whitespace::Whitespace;

/// One piece of collected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A string fragment, emitted as is.
    Text(String),
    /// A forced line feed (`<br>`, end of a table row).
    LineFeed,
    /// At least this many line feeds are required here (1 for blocks, 2 for paragraphs).
    Required(u8),
}

/// Break requirement next to a piece of content.
///
/// Only whether a break is present matters to white-space processing; the
/// kind records where it came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BreakHint {
    #[default]
    None,
    /// A boundary without a count: the next sibling is a `<br>`, or the edge
    /// of a block-level node passed to `to_text`. Never emitted as an item.
    Boundary,
    /// A required line break count.
    Count(u8),
    /// A forced line feed.
    LineFeed,
}

impl BreakHint {
    #[must_use]
    pub const fn is_break(self) -> bool {
        !matches!(self, Self::None)
    }

    pub(crate) const fn boundary_if(condition: bool) -> Self {
        if condition {
            Self::Boundary
        } else {
            Self::None
        }
    }

    /// The item this hint adds around an element's content, if any.
    pub(crate) fn to_item(self) -> Option<Item> {
        match self {
            Self::None | Self::Boundary => None,
            Self::Count(count) => Some(Item::Required(count)),
            Self::LineFeed => Some(Item::LineFeed),
        }
    }
}

/// Inherited state for collecting one child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    pub whitespace: Whitespace,
    pub break_before: BreakHint,
    pub break_after: BreakHint,
}
