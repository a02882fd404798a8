//! Display tree records.
//!
//! A [`TreeNode`] mirrors exactly one source element in the shape the
//! visualization page consumes. Optional fields are omitted from the JSON
//! output when unset; the field declaration order is the serialized order
//! and is part of the output contract.

use serde::Serialize;

/// Sentinel identifier for elements without an ITEMHEADER/ITEMID chain
pub const UNKNOWN_ID: &str = "Unbekannt";

/// One node of the display tree
///
/// Invariant: at most one of `children` and `value` is set. A node for an
/// element with child elements carries `children`; a leaf with non-blank
/// text carries `value`; an empty leaf carries neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    /// Tag name of the source element
    pub name: String,
    /// Extracted identifier, or the "Unbekannt" sentinel
    pub item_id: String,
    /// Trimmed text of a direct TEXT child
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Trimmed text of the BLOCKID child nested under a direct BLOCKREF child
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockid_content: Option<String>,
    /// Trimmed text of a direct DEFAULTDASI child
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaultdasi_content: Option<String>,
    /// Child nodes in document order, present iff the element has children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// Trimmed leaf text, present only for childless elements with non-blank text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TreeNode {
    /// Create a node with only the required fields set
    pub fn new(name: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_id: item_id.into(),
            text_content: None,
            blockid_content: None,
            defaultdasi_content: None,
            children: None,
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_node_serializes_to_name_and_item_id_only() {
        let node = TreeNode::new("ROOT", UNKNOWN_ID);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"name":"ROOT","item_id":"Unbekannt"}"#);
    }

    #[test]
    fn test_field_order_is_stable() {
        let mut node = TreeNode::new("N", "ID1");
        node.text_content = Some("t".to_string());
        node.blockid_content = Some("b".to_string());
        node.defaultdasi_content = Some("d".to_string());
        node.value = Some("v".to_string());

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"name":"N","item_id":"ID1","text_content":"t","blockid_content":"b","defaultdasi_content":"d","value":"v"}"#
        );
    }

    #[test]
    fn test_non_ascii_is_emitted_literally() {
        let node = TreeNode::new("GRUSS", "Größe");
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("Größe"));
        assert!(!json.contains("\\u"));
    }
}
