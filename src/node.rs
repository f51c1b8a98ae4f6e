//! Node tree consumed by text collection.
//!
//! The tree follows the hast shape: a `root` with children, `element`s with a
//! tag name, properties and children, `text` and `comment` leaves, and any
//! other node kind collapsed into [`Node::Other`]. It deserializes from hast
//! JSON, where elements may omit `properties` or `children`:
//!
//! ```rust
//! use rs_inner_text::Node;
//!
//! let json = r#"{"type": "element", "tagName": "p", "children": [{"type": "text", "value": "Hi"}]}"#;
//! let node: Node = serde_json::from_str(json)?;
//! assert_eq!(node.tag_name(), Some("p"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Document root.
    Root {
        #[serde(default)]
        children: Vec<Node>,
    },

    /// An element.
    Element(Element),

    /// A text node.
    Text {
        #[serde(default)]
        value: String,
    },

    /// A comment. Only stringified when it is the node passed to `to_text`.
    Comment {
        #[serde(default)]
        value: String,
    },

    /// Doctypes, instructions and unknown node kinds. Contributes nothing.
    #[serde(other)]
    Other,
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Lowercase tag name, e.g. `p`.
    pub tag_name: String,

    #[serde(default)]
    pub properties: Properties,

    #[serde(default)]
    pub children: Vec<Node>,
}

/// Element properties keyed by hast property name (`hidden`, `noWrap`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

/// A property value as it appears in hast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Truthiness of the value: `false`, `0`, `NaN`, `""` and null are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::String(value) => !value.is_empty(),
            Self::List(_) => true,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl Properties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// ```rust
    /// use rs_inner_text::Properties;
    ///
    /// let props = Properties::new().with("hidden", true);
    /// assert!(props.is_truthy("hidden"));
    /// assert!(!props.is_truthy("open"));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Whether the property is present and truthy. Absent properties are falsy.
    #[must_use]
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(PropertyValue::is_truthy)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Element {
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }
}

impl Node {
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self::Root { children }
    }

    /// Element without properties.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::element_with(tag_name, Properties::new(), children)
    }

    #[must_use]
    pub fn element_with(
        tag_name: impl Into<String>,
        properties: Properties,
        children: Vec<Node>,
    ) -> Self {
        Self::Element(Element {
            tag_name: tag_name.into(),
            properties,
            children,
        })
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn comment(value: impl Into<String>) -> Self {
        Self::Comment {
            value: value.into(),
        }
    }

    /// Children of a root or element; empty for everything else.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Root { children } | Self::Element(Element { children, .. }) => children,
            _ => &[],
        }
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|element| element.tag_name.as_str())
    }
}

/// First sibling after `siblings[index]` that passes `test`.
///
/// Used to decide whether a table row or cell is the last of its kind among
/// its parent's children.
#[must_use]
pub fn find_after<F>(siblings: &[Node], index: usize, test: F) -> Option<&Node>
where
    F: Fn(&Node) -> bool,
{
    siblings.iter().skip(index + 1).find(|node| test(*node))
}
