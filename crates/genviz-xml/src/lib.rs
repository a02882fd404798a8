//! genviz-xml - XML element tree model and parser
//!
//! This crate provides the owned element tree that the rest of genviz
//! consumes, together with a quick-xml based parser that assembles it
//! from a document file or an in-memory string.
//!
//! # Example
//!
//! ```
//! use genviz_xml::parse_str;
//!
//! let root = parse_str("<ROOT><CHILD>42</CHILD></ROOT>").unwrap();
//! assert_eq!(root.tag, "ROOT");
//! assert_eq!(root.children.len(), 1);
//! assert_eq!(root.children[0].trimmed_text(), Some("42"));
//! ```

pub mod element;
pub mod error;
pub mod parser;

// Re-exports
pub use element::Element;
pub use error::{Result, XmlError};
pub use parser::{parse_file, parse_str};
