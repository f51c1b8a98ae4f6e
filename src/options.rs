//! Configuration options for text collection.

use serde::{Deserialize, Serialize};

use crate::whitespace::Whitespace;

/// Configuration options for [`to_text_with_options`](crate::to_text_with_options).
///
/// # Example
///
/// ```rust
/// use rs_inner_text::{Options, Whitespace};
///
/// // The caller knows the node is styled `white-space: pre-wrap`.
/// let options = Options {
///     whitespace: Whitespace::PreWrap,
///     ..Options::default()
/// };
/// assert_eq!(options.whitespace, Whitespace::PreWrap);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// `white-space` mode assumed for the node passed in.
    ///
    /// Elements below it still override this by tag (`pre`, `textarea`, ...).
    ///
    /// Default: `Whitespace::Normal`
    pub whitespace: Whitespace,
}
