//! Compiled regex patterns.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Collection
// =============================================================================

/// Characters with the Bidi_Control property: ALM, LRM, RLM, LRE-RLO, LRI-PDI.
///
/// White-space processing ignores these as if they were not there.
pub static BIDI_CONTROL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{061C}\x{200E}\x{200F}\x{202A}-\x{202E}\x{2066}-\x{2069}]")
        .expect("BIDI_CONTROL regex")
});

/// A run of collapsible spaces and tabs.
pub static TAB_OR_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ]+").expect("TAB_OR_SPACES regex"));

// =============================================================================
// Charset Detection
// =============================================================================

/// Matches `<meta charset="...">`.
#[cfg(feature = "html")]
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// Matches `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[cfg(feature = "html")]
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("CONTENT_TYPE_CHARSET regex")
});
