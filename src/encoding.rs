//! Decoding of raw HTML bytes.
//!
//! Detects the charset declared in the document head and transcodes to UTF-8
//! before parsing.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CONTENT_TYPE_CHARSET, META_CHARSET};

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the declared encoding of an HTML document.
///
/// Checks, in order, a leading byte order mark, `<meta charset>` and
/// `<meta http-equiv="Content-Type">` within the first 1024 bytes. Unknown
/// labels and missing declarations fall back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*META_CHARSET, &*CONTENT_TYPE_CHARSET]
        .into_iter()
        .filter_map(|pattern| pattern.captures(&head))
        .filter_map(|captures| captures.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a string, replacing invalid sequences with U+FFFD.
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    let (decoded, _, _) = encoding.decode(html);
    decoded
}
