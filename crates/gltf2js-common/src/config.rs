//! Configuration
//!
//! Optional `gltf2js.toml` controlling how modules are emitted:
//!
//! ```toml
//! [emit]
//! ensure_ascii = true
//! unresolved_identifier = "reject"   # or "legacy"
//! ```

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "gltf2js.toml";

/// What to do when no identifier can be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedIdentifier {
    /// Fail with a usage error before anything is written.
    #[default]
    Reject,
    /// Render the literal text `None` as the identifier.
    Legacy,
}

/// Options for the module emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitOptions {
    /// Escape non-ASCII characters in the embedded JSON as `\uXXXX`.
    pub ensure_ascii: bool,
    pub unresolved_identifier: UnresolvedIdentifier,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            ensure_ascii: true,
            unresolved_identifier: UnresolvedIdentifier::Reject,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gltf2JsConfig {
    pub emit: EmitOptions,
}

impl Gltf2JsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConvertError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Find `gltf2js.toml` in `dir`, if present.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Load the explicit file if given, else a discovered one, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(|| Self::discover(dir)) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
