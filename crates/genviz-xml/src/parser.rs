//! XML document parsing.
//!
//! Assembles an owned [`Element`] tree from quick-xml events. Only the
//! structure the converter needs is kept: tag names, attributes, the text
//! preceding the first child element, and child order. Tail text after a
//! child element is dropped.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::element::Element;
use crate::error::{Result, XmlError};

/// Origin label used for documents parsed from in-memory strings
const STRING_ORIGIN: &str = "<string>";

/// Parse an XML document from a string
pub fn parse_str(xml: &str) -> Result<Element> {
    parse_document(xml.as_bytes(), STRING_ORIGIN)
}

/// Parse an XML document from a file
///
/// A missing file is reported as [`XmlError::SourceNotFound`]; a
/// malformed document as [`XmlError::Malformed`] carrying the path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Element> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(XmlError::SourceNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    parse_document(&bytes, &path.display().to_string())
}

fn parse_document(xml: &[u8], origin: &str) -> Result<Element> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(malformed(origin, "junk after document element"));
                }
                stack.push(element_from_start(e));
            }
            Ok(Event::Empty(ref e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(malformed(origin, "junk after document element"));
                }
                attach(element_from_start(e), &mut stack, &mut root);
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| malformed(origin, &err.to_string()))?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                append_text(&mut stack, &text);
            }
            Ok(Event::End(_)) => {
                // Mismatched end tags are rejected by the reader itself.
                match stack.pop() {
                    Some(element) => attach(element, &mut stack, &mut root),
                    None => return Err(malformed(origin, "unexpected closing tag")),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declarations, comments, processing instructions
            Err(err) => return Err(malformed(origin, &err.to_string())),
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(malformed(origin, "unexpected end of document"));
    }

    root.ok_or_else(|| malformed(origin, "no root element"))
}

fn malformed(origin: &str, message: &str) -> XmlError {
    XmlError::Malformed {
        path: origin.to_string(),
        message: message.to_string(),
    }
}

fn element_from_start(e: &BytesStart) -> Element {
    let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());

    element.attributes = e
        .attributes()
        .filter_map(|attr| attr.ok())
        .filter_map(|attr| {
            let key = String::from_utf8(attr.key.as_ref().to_vec()).ok()?;
            let value = attr.unescape_value().ok()?.into_owned();
            Some((key, value))
        })
        .collect();

    element
}

/// Attach a finished element to its parent, or make it the document root
fn attach(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// Record text on the innermost open element, but only while it has no
/// children yet: the element's text is the fragment before the first child.
fn append_text(stack: &mut [Element], text: &str) {
    if let Some(current) = stack.last_mut() {
        if current.children.is_empty() {
            match &mut current.text {
                Some(existing) => existing.push_str(text),
                None => current.text = Some(text.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_simple_document() {
        let root = parse_str("<ROOT><A>1</A><B>2</B></ROOT>").unwrap();

        assert_eq!(root.tag, "ROOT");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "A");
        assert_eq!(root.children[0].trimmed_text(), Some("1"));
        assert_eq!(root.children[1].tag, "B");
        assert_eq!(root.children[1].trimmed_text(), Some("2"));
    }

    #[test]
    fn test_parse_preserves_child_order_of_repeated_tags() {
        let root = parse_str("<R><X>1</X><Y>2</Y><X>3</X></R>").unwrap();

        let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, ["X", "Y", "X"]);
        assert_eq!(root.children[2].trimmed_text(), Some("3"));
    }

    #[test]
    fn test_parse_attributes_in_document_order() {
        let root = parse_str(r#"<NODE beta="2" alpha="1"/>"#).unwrap();

        assert_eq!(
            root.attributes,
            vec![
                ("beta".to_string(), "2".to_string()),
                ("alpha".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_attribute_entities_unescaped() {
        let root = parse_str(r#"<NODE label="a &amp; b"/>"#).unwrap();
        assert_eq!(root.attributes[0].1, "a & b");
    }

    #[test]
    fn test_empty_element_has_no_text_and_no_children() {
        let root = parse_str("<ROOT><LEAF/></ROOT>").unwrap();

        let leaf = &root.children[0];
        assert!(leaf.children.is_empty());
        assert_eq!(leaf.text, None);
    }

    #[test]
    fn test_text_before_first_child_only() {
        let root = parse_str("<A>before<B/>after</A>").unwrap();

        assert_eq!(root.trimmed_text(), Some("before"));
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_cdata_is_text() {
        let root = parse_str("<A><![CDATA[1 < 2]]></A>").unwrap();
        assert_eq!(root.trimmed_text(), Some("1 < 2"));
    }

    #[test]
    fn test_mismatched_tags_are_rejected() {
        let err = parse_str("<A><B></A>").unwrap_err();
        assert!(matches!(err, XmlError::Malformed { .. }));
    }

    #[test]
    fn test_unclosed_root_is_rejected() {
        assert!(parse_str("<A><B></B>").is_err());
    }

    #[test]
    fn test_empty_input_has_no_root() {
        let err = parse_str("").unwrap_err();
        match err {
            XmlError::Malformed { path, message } => {
                assert_eq!(path, "<string>");
                assert!(message.contains("no root element"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_second_root_is_rejected() {
        assert!(parse_str("<A></A><B></B>").is_err());
    }

    #[test]
    fn test_parse_file_reports_missing_source() {
        let err = parse_file("/nonexistent/input.xml").unwrap_err();
        assert!(matches!(err, XmlError::SourceNotFound(_)));
    }

    #[test]
    fn test_parse_file_carries_path_on_malformed_input() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<A><B></A>").unwrap();

        let err = parse_file(file.path()).unwrap_err();
        match err {
            XmlError::Malformed { path, .. } => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_file_round_trips_content() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("<ROOT><TEXT>Grüße</TEXT></ROOT>".as_bytes())
            .unwrap();

        let root = parse_file(file.path()).unwrap();
        assert_eq!(root.find("TEXT").unwrap().trimmed_text(), Some("Grüße"));
    }
}
