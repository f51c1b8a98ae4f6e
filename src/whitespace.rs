//! CSS `white-space` modes and their inference from tags and attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::node::Node;

/// Effective `white-space` value.
///
/// Only `Normal` collapses text; the other modes pass text through verbatim
/// and differ only in soft-wrapping, which does not affect text content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Whitespace {
    #[default]
    Normal,
    Pre,
    Nowrap,
    PreWrap,
}

impl Whitespace {
    /// CSS keyword for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Pre => "pre",
            Self::Nowrap => "nowrap",
            Self::PreWrap => "pre-wrap",
        }
    }

    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Whitespace {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "pre" => Ok(Self::Pre),
            "nowrap" => Ok(Self::Nowrap),
            "pre-wrap" => Ok(Self::PreWrap),
            _ => Err(Error::InvalidWhitespace(value.to_string())),
        }
    }
}

/// Infer the `white-space` mode of `node` given the mode of its parent.
///
/// Void elements are not considered (so `nobr wbr` -> `normal` is ignored).
#[must_use]
pub fn infer_whitespace(node: &Node, inherited: Whitespace) -> Whitespace {
    let Some(element) = node.as_element() else {
        return inherited;
    };

    match element.tag_name.as_str() {
        "listing" | "plaintext" | "xmp" => Whitespace::Pre,
        "nobr" => Whitespace::Nowrap,
        "pre" if element.properties.is_truthy("wrap") => Whitespace::PreWrap,
        "pre" => Whitespace::Pre,
        "td" | "th" if element.properties.is_truthy("noWrap") => Whitespace::Nowrap,
        "textarea" => Whitespace::PreWrap,
        _ => inherited,
    }
}
