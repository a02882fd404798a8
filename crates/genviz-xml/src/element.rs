//! Owned XML element tree.
//!
//! An [`Element`] keeps its tag name, attributes in document order, the
//! text that precedes its first child element, and its child elements in
//! document order. The tree is read-only to downstream consumers.

/// A single element of a parsed XML document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name as written in the document
    pub tag: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Text between the start tag and the first child element
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Find the first direct child with the given tag name
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Trimmed direct text content, `None` when absent or blank
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
