//! Display-tree construction.
//!
//! Walks a parsed element tree bottom-up and emits one [`TreeNode`] per
//! element. Missing sub-elements are never errors here: enrichment fields
//! stay unset and the identifier falls back to its sentinel.

use genviz_xml::Element;

use crate::tree::{TreeNode, UNKNOWN_ID};

/// Build the display tree for an element and its entire subtree
///
/// Child nodes appear in document order; repeated sibling tags stay
/// distinct entries (the grouped converter is the path that merges them).
pub fn build_tree(element: &Element) -> TreeNode {
    let mut node = TreeNode::new(element.tag.clone(), extract_item_id(element));
    enrich_node(&mut node, element);

    if !element.children.is_empty() {
        node.children = Some(element.children.iter().map(build_tree).collect());
    } else if let Some(text) = element.trimmed_text() {
        node.value = Some(text.to_string());
    }

    node
}

/// Attach display fields from well-known direct children
///
/// Each rule applies independently; an absent child or blank text leaves
/// the corresponding field unset. Only direct children are inspected
/// (one level deeper for the BLOCKREF/BLOCKID chain).
pub fn enrich_node(node: &mut TreeNode, element: &Element) {
    if let Some(text) = element.find("TEXT").and_then(Element::trimmed_text) {
        node.text_content = Some(text.to_string());
    }

    if let Some(blockid) = element
        .find("BLOCKREF")
        .and_then(|blockref| blockref.find("BLOCKID"))
        .and_then(Element::trimmed_text)
    {
        node.blockid_content = Some(blockid.to_string());
    }

    if let Some(dasi) = element.find("DEFAULTDASI").and_then(Element::trimmed_text) {
        node.defaultdasi_content = Some(dasi.to_string());
    }
}

/// Resolve the semantic identifier of an element
///
/// Follows the ITEMHEADER → ITEMID chain of direct children; any missing
/// link or blank text yields the sentinel. The double-dollar replacement
/// is a deliberate no-op: identifiers keep their `$$` separators verbatim.
pub fn extract_item_id(element: &Element) -> String {
    element
        .find("ITEMHEADER")
        .and_then(|header| header.find("ITEMID"))
        .and_then(Element::trimmed_text)
        .map(|id| id.replace("$$", "$$"))
        .unwrap_or_else(|| UNKNOWN_ID.to_string())
}
