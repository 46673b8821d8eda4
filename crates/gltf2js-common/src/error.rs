//! Error types for the gltf2js conversion pipeline

use miette::Diagnostic;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a document into a module
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    /// An input or output stream could not be opened, read or written
    #[error("I/O error on {path}: {source}")]
    #[diagnostic(code(gltf2js::io))]
    Io {
        /// Display name of the stream (`<stdin>`, `<stdout>` or a path)
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed JSON
    #[error("Failed to parse JSON from {source_name}: {message}")]
    #[diagnostic(code(gltf2js::parse))]
    Parse {
        /// Display name of the input stream
        source_name: String,
        /// 1-based line of the error, 0 if unknown
        line: usize,
        /// 1-based column of the error, 0 if unknown
        column: usize,
        message: String,
    },

    /// No identifier was given and none can be derived from the output
    #[error("No export identifier: output goes to standard output and no --variable was given")]
    #[diagnostic(
        code(gltf2js::missing_identifier),
        help(
            "pass --variable <NAME>, write to a named .js file, or pass --legacy-unresolved to emit `None`"
        )
    )]
    MissingIdentifier,

    /// The configuration file could not be read or is invalid
    #[error("Configuration error in {path}: {message}")]
    #[diagnostic(code(gltf2js::config))]
    Config { path: String, message: String },

    /// Re-serialization of the document failed
    #[error("Failed to serialize document: {0}")]
    #[diagnostic(code(gltf2js::serialize))]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(source_name: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_keeps_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let converted = ConvertError::parse("scene.gltf", &err);
        match converted {
            ConvertError::Parse {
                source_name,
                line,
                column,
                ..
            } => {
                assert_eq!(source_name, "scene.gltf");
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ConvertError::io(
            "build/model.js",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on build/model.js: denied");
        match err {
            ConvertError::Io { path, source } => {
                assert_eq!(path, "build/model.js");
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_identifier_has_help() {
        let err = ConvertError::MissingIdentifier;
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--variable"));
    }
}
