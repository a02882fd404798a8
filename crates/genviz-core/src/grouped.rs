//! Generic grouping converter.
//!
//! The second XML→JSON strategy, kept fully separate from the fixed-schema
//! display tree: every element becomes `{ tag: body }`, where the body
//! holds `@attributes`, `#text`, and one key per distinct child tag mapping
//! to the array of converted children. Repeated sibling tags merge into the
//! same array - the disambiguation the display tree deliberately avoids.
//! Output key order is the serializer's (sorted) and deterministic.

use genviz_xml::Element;
use serde_json::{Map, Value};

/// Key carrying the attribute map of an element
const ATTRIBUTES_KEY: &str = "@attributes";
/// Key carrying the direct text of an element
const TEXT_KEY: &str = "#text";

/// Convert an element subtree into its grouped JSON form
pub fn to_grouped_value(element: &Element) -> Value {
    let mut wrapper = Map::new();
    wrapper.insert(element.tag.clone(), grouped_body(element));
    Value::Object(wrapper)
}

fn grouped_body(element: &Element) -> Value {
    let mut body = Map::new();

    if !element.attributes.is_empty() {
        let attributes: Map<String, Value> = element
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();
        body.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
    }

    if let Some(text) = element.trimmed_text() {
        body.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
    }

    for child in &element.children {
        // Each entry keeps its own { tag: body } wrapper inside the array.
        let converted = to_grouped_value(child);
        match body.get_mut(&child.tag) {
            Some(Value::Array(entries)) => entries.push(converted),
            _ => {
                body.insert(child.tag.clone(), Value::Array(vec![converted]));
            }
        }
    }

    Value::Object(body)
}
