//! # rs-inner-text
//!
//! Plain text of an HTML-like node tree as a browser would render it: the
//! `innerText` getter of <https://html.spec.whatwg.org/#the-innertext-idl-attribute>,
//! computed as if every node is rendered with the default user agent
//! stylesheet.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_inner_text::{to_text, Node};
//!
//! let tree = Node::element(
//!     "div",
//!     vec![
//!         Node::element("p", vec![Node::text("Foxtrot.")]),
//!         Node::element("p", vec![Node::text("Golf.")]),
//!     ],
//! );
//! assert_eq!(to_text(&tree), "Foxtrot.\n\nGolf.");
//! ```
//!
//! ## What is handled
//!
//! - **White-space**: `normal` collapsing of spaces, tabs and line feeds, and
//!   verbatim `pre`, `pre-wrap` and `nowrap` content
//! - **Blocks**: line breaks around block-level elements, double breaks around paragraphs
//! - **Tables**: tabs between cells, line feeds between rows
//! - **Hidden content**: `<head>`, `<script>`, `hidden` elements, closed dialogs
//!
//! Stylesheets, scripts, bidi reordering and East Asian segment break removal
//! are not supported.

mod error;
mod extract;
mod options;
mod patterns;

/// Node tree types and sibling search.
pub mod node;

/// Tag catalogs and node classification.
pub mod tags;

/// `white-space` modes and inference.
pub mod whitespace;

/// Rendered text collection steps.
pub mod collector;

/// HTML parsing into node trees.
#[cfg(feature = "html")]
pub mod dom;

/// Character encoding detection and transcoding.
#[cfg(feature = "html")]
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use node::{Element, Node, Properties, PropertyValue};
pub use options::Options;
pub use whitespace::Whitespace;

/// Rendered text of `node` using default options.
///
/// # Example
///
/// ```rust
/// use rs_inner_text::{to_text, Node};
///
/// let p = Node::element("p", vec![Node::text("Alpha   bravo  charlie.")]);
/// assert_eq!(to_text(&p), "Alpha bravo charlie.");
/// ```
#[must_use]
pub fn to_text(node: &Node) -> String {
    to_text_with_options(node, &Options::default())
}

/// Rendered text of `node` with custom options.
///
/// # Example
///
/// ```rust
/// use rs_inner_text::{to_text_with_options, Node, Options, Whitespace};
///
/// let root = Node::root(vec![Node::text("  two  spaces ")]);
/// let options = Options {
///     whitespace: Whitespace::Pre,
///     ..Options::default()
/// };
/// assert_eq!(to_text_with_options(&root, &options), "  two  spaces ");
/// ```
#[must_use]
pub fn to_text_with_options(node: &Node, options: &Options) -> String {
    extract::to_text(node, options)
}

/// Rendered text of a tree given as hast JSON.
///
/// # Example
///
/// ```rust
/// use rs_inner_text::{hast_json_to_text, Options};
///
/// let json = r#"{"type": "root", "children": [
///     {"type": "element", "tagName": "p", "children": [{"type": "text", "value": "Echo"}]}
/// ]}"#;
/// assert_eq!(hast_json_to_text(json, &Options::default())?, "Echo");
/// # Ok::<(), rs_inner_text::Error>(())
/// ```
pub fn hast_json_to_text(json: &str, options: &Options) -> Result<String> {
    let node: Node = serde_json::from_str(json)?;
    Ok(to_text_with_options(&node, options))
}

/// Parse `html` and return the rendered text of the document.
///
/// # Example
///
/// ```rust
/// use rs_inner_text::html_to_text;
///
/// let html = "<html><head><title>Hotel</title></head><body><p>Mike.<br>November.</p></body></html>";
/// assert_eq!(html_to_text(html), "Mike.\nNovember.");
/// ```
#[cfg(feature = "html")]
#[must_use]
pub fn html_to_text(html: &str) -> String {
    html_to_text_with_options(html, &Options::default())
}

/// Parse `html` and return the rendered text of the document with custom options.
#[cfg(feature = "html")]
#[must_use]
pub fn html_to_text_with_options(html: &str, options: &Options) -> String {
    to_text_with_options(&dom::from_html(html), options)
}

/// Decode raw HTML bytes using their declared charset, then extract text.
///
/// # Example
///
/// ```rust
/// use rs_inner_text::html_bytes_to_text;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert_eq!(html_bytes_to_text(html), "Caf\u{e9}");
/// ```
#[cfg(feature = "html")]
#[must_use]
pub fn html_bytes_to_text(html: &[u8]) -> String {
    html_to_text(&encoding::decode_html(html))
}
