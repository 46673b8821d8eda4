//! Module emitter
//!
//! Produces `const <id> = "<json>"; export default <id>;`.

use crate::config::{EmitOptions, UnresolvedIdentifier};
use crate::document::Document;
use crate::error::{ConvertError, Result};
use crate::identifier::{LEGACY_UNRESOLVED_TEXT, ResolvedIdentifier};
use crate::json::to_canonical_json;
use crate::quote::quote_string;
use tracing::{debug, warn};

/// The generated module source. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleText(String);

impl ModuleText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the module text around an already quoted literal.
///
/// `identifier` is substituted verbatim into both the declaration and the
/// export, so the two can never disagree.
pub fn compose_module(identifier: &str, literal: &str) -> ModuleText {
    ModuleText(format!(
        "const {identifier} = {literal}; export default {identifier};"
    ))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleEmitter {
    options: EmitOptions,
}

impl ModuleEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Text to render for `identifier`, or an error if it is unresolved and
    /// legacy rendering is off.
    pub fn identifier_text<'a>(&self, identifier: &'a ResolvedIdentifier) -> Result<&'a str> {
        match (identifier.as_name(), self.options.unresolved_identifier) {
            (Some(name), _) => Ok(name),
            (None, UnresolvedIdentifier::Legacy) => {
                warn!(
                    identifier = LEGACY_UNRESOLVED_TEXT,
                    "no identifier resolved, rendering legacy placeholder"
                );
                Ok(LEGACY_UNRESOLVED_TEXT)
            }
            (None, UnresolvedIdentifier::Reject) => Err(ConvertError::MissingIdentifier),
        }
    }

    /// Render `document` as a module exporting it under `identifier`.
    pub fn emit(&self, document: &Document, identifier: &ResolvedIdentifier) -> Result<ModuleText> {
        let name = self.identifier_text(identifier)?;
        let json = to_canonical_json(document, self.options.ensure_ascii)?;
        let literal = quote_string(&json);
        debug!(
            json_bytes = json.len(),
            literal_bytes = literal.len(),
            "rendered document literal"
        );
        Ok(compose_module(name, &literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn legacy() -> ModuleEmitter {
        ModuleEmitter::new(EmitOptions {
            unresolved_identifier: UnresolvedIdentifier::Legacy,
            ..EmitOptions::default()
        })
    }

    #[test]
    fn test_emit_round_trip_example() {
        let doc = json!({"a": 1, "b": [true, null]});
        let module = ModuleEmitter::default()
            .emit(&doc, &ResolvedIdentifier::Derived("foo".to_string()))
            .unwrap();
        assert_eq!(
            module.as_str(),
            r#"const foo = "{\"a\": 1, \"b\": [true, null]}"; export default foo;"#
        );
    }

    #[test]
    fn test_emit_explicit_identifier() {
        let module = ModuleEmitter::default()
            .emit(&json!([]), &ResolvedIdentifier::Explicit("Model".to_string()))
            .unwrap();
        assert_eq!(module.as_str(), r#"const Model = "[]"; export default Model;"#);
    }

    #[test]
    fn test_emit_empty_derived_identifier() {
        let module = ModuleEmitter::default()
            .emit(&json!(null), &ResolvedIdentifier::Derived(String::new()))
            .unwrap();
        assert_eq!(module.as_str(), r#"const  = "null"; export default ;"#);
    }

    #[test]
    fn test_unresolved_is_rejected_by_default() {
        let err = ModuleEmitter::default()
            .emit(&json!({}), &ResolvedIdentifier::Unresolved)
            .unwrap_err();
        assert!(matches!(err, ConvertError::MissingIdentifier));
    }

    #[test]
    fn test_unresolved_renders_none_in_legacy_mode() {
        let module = legacy()
            .emit(&json!({"k": "v"}), &ResolvedIdentifier::Unresolved)
            .unwrap();
        assert_eq!(
            module.as_str(),
            r#"const None = "{\"k\": \"v\"}"; export default None;"#
        );
    }

    #[test]
    fn test_legacy_mode_keeps_resolved_names() {
        let module = legacy()
            .emit(&json!(1), &ResolvedIdentifier::Explicit("x".to_string()))
            .unwrap();
        assert_eq!(module.as_str(), r#"const x = "1"; export default x;"#);
    }

    #[test]
    fn test_no_trailing_newline() {
        let module = compose_module("a", "\"1\"");
        assert!(module.as_str().ends_with("export default a;"));
        assert!(!module.as_str().ends_with('\n'));
    }

    #[test]
    fn test_emit_keeps_number_text() {
        let doc: Document =
            serde_json::from_str("[12345678901234567890123, -0, 1e400, 1E+16]").unwrap();
        let module = ModuleEmitter::default()
            .emit(&doc, &ResolvedIdentifier::Explicit("n".to_string()))
            .unwrap();
        assert_eq!(
            module.as_str(),
            r#"const n = "[12345678901234567890123, -0, 1e400, 1E+16]"; export default n;"#
        );
    }

    #[test]
    fn test_embedded_literal_decodes_to_document() {
        let doc = json!({
            "asset": {"generator": "Khronos glTF Blender I/O", "version": "2.0"},
            "nodes": [{"name": "Fiber \"A\"", "translation": [0.0, 1.5, -2.25]}],
            "extras": {"note": "line1\nline2\\end", "unicode": "\u{e9}\u{1F600}"}
        });
        let module = ModuleEmitter::default()
            .emit(&doc, &ResolvedIdentifier::Explicit("scene".to_string()))
            .unwrap();

        let text = module.as_str();
        let literal = text
            .strip_prefix("const scene = ")
            .and_then(|rest| rest.strip_suffix("; export default scene;"))
            .unwrap();
        let json_text: String = serde_json::from_str(literal).unwrap();
        let reparsed: Document = serde_json::from_str(&json_text).unwrap();
        assert_eq!(reparsed, doc);
    }
}
