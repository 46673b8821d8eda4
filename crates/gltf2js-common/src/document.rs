//! Document loading
//!
//! Reads the whole input stream and parses it into a generic JSON tree.
//! Object keys keep their insertion order (`serde_json/preserve_order`) and
//! numbers keep their source text (`serde_json/arbitrary_precision`), so the
//! embedded text lists keys exactly as the source did and never rounds,
//! widens or rejects a number.
//!
//! A string holding an unpaired UTF-16 surrogate escape (`"\ud800"`) cannot
//! be represented as a Rust `String` and is reported as a parse error.

use crate::error::{ConvertError, Result};
use std::io::Read;
use tracing::debug;

/// A parsed JSON document.
pub type Document = serde_json::Value;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read `reader` to exhaustion and parse it as JSON.
///
/// `source_name` is only used in diagnostics.
pub fn load_document<R: Read>(mut reader: R, source_name: &str) -> Result<Document> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ConvertError::io(source_name, e))?;
    debug!(source = source_name, bytes = bytes.len(), "read input document");

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    serde_json::from_slice(content).map_err(|e| ConvertError::parse(source_name, &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_keeps_key_order() {
        let doc = load_document(r#"{"z": 1, "a": 2, "m": 3}"#.as_bytes(), "<test>").unwrap();
        let keys: Vec<&str> = doc
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_load_accepts_scalars_and_whitespace() {
        let doc = load_document("  \n[1, \"two\", null]\n\n".as_bytes(), "<test>").unwrap();
        assert_eq!(doc, json!([1, "two", null]));

        let doc = load_document("42".as_bytes(), "<test>").unwrap();
        assert_eq!(doc, json!(42));
    }

    #[test]
    fn test_load_strips_byte_order_mark() {
        let input = b"\xEF\xBB\xBF{\"asset\": {\"version\": \"2.0\"}}";
        let doc = load_document(&input[..], "<test>").unwrap();
        assert_eq!(doc["asset"]["version"], "2.0");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        for input in ["", "{", "{\"a\": 1,}", "[1] [2]", "const x = 1;"] {
            let err = load_document(input.as_bytes(), "<test>").unwrap_err();
            assert!(
                matches!(err, ConvertError::Parse { .. }),
                "expected parse error for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_load_keeps_number_text() {
        let doc = load_document(
            "[12345678901234567890123, -0, 1e400, 1E+16, 2.50]".as_bytes(),
            "<test>",
        )
        .unwrap();
        let numbers: Vec<String> = doc
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(
            numbers,
            vec!["12345678901234567890123", "-0", "1e400", "1E+16", "2.50"]
        );
    }

    #[test]
    fn test_load_rejects_lone_surrogate() {
        for input in [r#""\ud800""#, r#"{"name": "a\udc00b"}"#] {
            let err = load_document(input.as_bytes(), "<test>").unwrap_err();
            assert!(
                matches!(err, ConvertError::Parse { line: 1, .. }),
                "expected parse error for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_load_accepts_surrogate_pairs() {
        let doc = load_document(r#""\ud83d\ude00""#.as_bytes(), "<test>").unwrap();
        assert_eq!(doc, json!("\u{1F600}"));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let err = load_document(&b"\"\xFF\""[..], "<test>").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }
}
