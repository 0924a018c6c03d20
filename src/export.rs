// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::json;

use crate::AxonError;
use crate::ast::{Document, Value};
use crate::parser::Parser;

/// Export a parameter tree to JSON.
///
/// Converts all parameter values to their JSON equivalents:
/// - Strings, numbers, booleans, null → direct mapping
/// - Sequences, mappings → nested JSON structures (key order preserved)
/// - References → their literal spelling, `"ref('dotted.path')"`
/// - Resource links → their literal spelling, `"url(\"path\")"`
///
/// Markers keep their spelling instead of being resolved here: exporting is
/// a pure serialization step, resolution happens in the store.
pub fn export_value_to_json(value: &Value) -> Result<String, AxonError> {
    Ok(serde_json::to_string_pretty(&value_to_json(value)).unwrap())
}

/// Export a whole document's root mapping to JSON.
pub fn export_document_to_json(doc: &Document) -> Result<String, AxonError> {
    export_value_to_json(&doc.root)
}

fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::String(s) => json!(s),
        Value::Number(n) => json!(n),
        Value::Bool(b) => json!(b),
        Value::Null => serde_json::Value::Null,
        Value::Sequence(items) => {
            json!(items.iter().map(value_to_json).collect::<Vec<_>>())
        }
        Value::Mapping(entries) => {
            let map = entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect::<serde_json::Map<_, _>>();
            serde_json::Value::Object(map)
        }
        Value::Reference(path) => json!(format!("ref('{}')", path.join("."))),
        Value::ResourceLink(path) => json!(format!("url(\"{}\")", path)),
    }
}

/// Export a parameter file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns an error if the file doesn't exist or contains invalid syntax.
pub fn export_file<P: AsRef<Path>>(path: P) -> Result<String, AxonError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|e| AxonError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.display().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(500),
    })?;

    let mut parser = Parser::new(&input)?;
    let root = parser.parse_document()?;
    export_value_to_json(&root)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Reference(path) => serializer.serialize_str(&format!("ref('{}')", path.join("."))),
            Value::ResourceLink(path) => serializer.serialize_str(&format!("url(\"{}\")", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn test_export_resolved_tree() {
        let input = r#"
{
    'exc_layer': {
        'size': 4000,
        'record': true,
    },
    'weights': [0.004, 0.051],
}
"#;
        let mut parser = Parser::new(input).expect("Failed to create parser");
        let root = parser.parse_document().expect("Failed to parse document");

        let json_output = export_value_to_json(&root).expect("Failed to export to JSON");
        println!("--- Exported JSON ---\n{}", json_output);

        let deserialized: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(deserialized["exc_layer"]["size"], 4000.0);
        assert_eq!(deserialized["exc_layer"]["record"], true);
        assert_eq!(deserialized["weights"][1], 0.051);
    }

    #[test]
    fn test_export_keeps_marker_spelling() {
        let input = r#"{'conn': ref('inh_layer.weight'), 'cell': url("components/cell")}"#;

        let mut parser = Parser::new(input).expect("Failed to create parser");
        let root = parser.parse_document().expect("Failed to parse document");

        let json_output = export_value_to_json(&root).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["conn"], "ref('inh_layer.weight')");
        assert_eq!(v["cell"], "url(\"components/cell\")");
    }

    #[test]
    fn test_export_preserves_key_order() {
        let input = "{'zeta': 1, 'alpha': 2, 'mu': 3}";

        let mut parser = Parser::new(input).expect("Failed to create parser");
        let root = parser.parse_document().expect("Failed to parse document");

        let json_output = export_value_to_json(&root).unwrap();
        let zeta = json_output.find("zeta").unwrap();
        let alpha = json_output.find("alpha").unwrap();
        let mu = json_output.find("mu").unwrap();
        assert!(zeta < alpha && alpha < mu);
    }

    #[test]
    fn test_serde_serialize_impl() {
        let input = "{'a': null, 'b': [1, true]}";

        let mut parser = Parser::new(input).expect("Failed to create parser");
        let root = parser.parse_document().expect("Failed to parse document");

        let compact = serde_json::to_string(&root).unwrap();
        assert_eq!(compact, r#"{"a":null,"b":[1.0,true]}"#);
    }
}
