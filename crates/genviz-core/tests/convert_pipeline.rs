//! Integration tests for the full parse → build → write pipeline.

use genviz_core::{build_tree, ConvertEngine, GRAPH_DATA_FILE};
use genviz_xml::parse_str;
use tempfile::TempDir;

const SAMPLE: &str = "<GENERATOR>\
    <ITEMHEADER><ITEMID>GEN$$01</ITEMID></ITEMHEADER>\
    <ITEM><TEXT>Begrüßung</TEXT></ITEM>\
    </GENERATOR>";

#[test]
fn test_display_tree_json_shape() {
    let root = parse_str(SAMPLE).unwrap();
    let tree = build_tree(&root);
    let rendered = serde_json::to_string_pretty(&tree).unwrap();

    let expected = r#"{
  "name": "GENERATOR",
  "item_id": "GEN$$01",
  "children": [
    {
      "name": "ITEMHEADER",
      "item_id": "Unbekannt",
      "children": [
        {
          "name": "ITEMID",
          "item_id": "Unbekannt",
          "value": "GEN$$01"
        }
      ]
    },
    {
      "name": "ITEM",
      "item_id": "Unbekannt",
      "text_content": "Begrüßung",
      "children": [
        {
          "name": "TEXT",
          "item_id": "Unbekannt",
          "value": "Begrüßung"
        }
      ]
    }
  ]
}"#;

    assert_eq!(rendered, expected);
}

#[test]
fn test_convert_engine_writes_graph_data() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xml");
    std::fs::write(&input, SAMPLE).unwrap();
    let output_dir = dir.path().join("visualizer");

    let written = ConvertEngine::convert_document(&input, &output_dir).unwrap();

    assert_eq!(written, output_dir.join(GRAPH_DATA_FILE));
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(value["name"], "GENERATOR");
    assert_eq!(value["item_id"], "GEN$$01");
    assert_eq!(value["children"].as_array().unwrap().len(), 2);
}

#[test]
fn test_convert_engine_grouped_mode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xml");
    std::fs::write(&input, "<A><B>1</B><B>2</B></A>").unwrap();

    let written = ConvertEngine::convert_document_grouped(&input, dir.path()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    let entries = value["A"]["B"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["B"]["#text"], "1");
    assert_eq!(entries[1]["B"]["#text"], "2");
}

#[test]
fn test_convert_engine_missing_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("visualizer");

    let result = ConvertEngine::convert_document(&dir.path().join("absent.xml"), &output_dir);

    assert!(result.is_err());
    assert!(!output_dir.exists());
}

#[test]
fn test_failed_conversion_keeps_prior_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.xml");
    std::fs::write(&input, SAMPLE).unwrap();
    let output_dir = dir.path().to_path_buf();

    let written = ConvertEngine::convert_document(&input, &output_dir).unwrap();
    let before = std::fs::read(&written).unwrap();

    // Second run against a malformed document fails during parsing and
    // must not touch the existing artifact.
    std::fs::write(&input, "<A><B></A>").unwrap();
    assert!(ConvertEngine::convert_document(&input, &output_dir).is_err());

    assert_eq!(std::fs::read(&written).unwrap(), before);
}
