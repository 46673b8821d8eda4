//! Export identifier resolution

use crate::stream::OutputTarget;
use tracing::{debug, warn};

/// Marker searched for in the output base name when deriving an identifier.
pub const MODULE_SUFFIX: &str = ".js";

/// Text rendered for an unresolved identifier in legacy mode.
pub const LEGACY_UNRESOLVED_TEXT: &str = "None";

/// The export name for a generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIdentifier {
    /// Supplied by the caller, used verbatim without validation.
    Explicit(String),
    /// Derived from the output file name. May be empty.
    Derived(String),
    /// No explicit name and output goes to the standard stream.
    Unresolved,
}

impl ResolvedIdentifier {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Explicit(name) | Self::Derived(name) => Some(name.as_str()),
            Self::Unresolved => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicit",
            Self::Derived(_) => "derived",
            Self::Unresolved => "unresolved",
        }
    }
}

/// Derive an identifier from a file base name.
///
/// Returns everything before the last `.js` in `base_name`, or the empty
/// string when `.js` does not occur at all. The match is a plain substring
/// search, so `scene.json` yields `scene`.
pub fn derive_identifier(base_name: &str) -> &str {
    match base_name.rfind(MODULE_SUFFIX) {
        Some(idx) => &base_name[..idx],
        None => "",
    }
}

/// Pick the identifier for a run.
///
/// An explicit name always wins, even when writing to stdout.
pub fn resolve_identifier(explicit: Option<&str>, output: &OutputTarget) -> ResolvedIdentifier {
    let resolved = match (explicit, output.base_name()) {
        (Some(name), _) => ResolvedIdentifier::Explicit(name.to_string()),
        (None, Some(base_name)) => {
            let derived = derive_identifier(&base_name);
            if derived.is_empty() {
                warn!(
                    output = %output.name(),
                    "output file name has no usable `.js` stem, identifier is empty"
                );
            }
            ResolvedIdentifier::Derived(derived.to_string())
        }
        (None, None) => ResolvedIdentifier::Unresolved,
    };
    debug!(kind = resolved.kind(), name = ?resolved.as_name(), "resolved identifier");
    resolved
}
