//! Input and output destinations
//!
//! The standard streams are modelled as explicit variants chosen by the
//! invocation layer, so the rest of the pipeline never reaches for process
//! globals on its own.

use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Path argument that selects the standard stream instead of a file.
pub const STDIO_ARG: &str = "-";

/// Where the JSON document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map an optional CLI path to a source. `None` and `-` select stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != STDIO_ARG => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for reading. The handle is released when the returned
    /// reader is dropped.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| ConvertError::io(self.name(), e))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Where the generated module is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Map an optional CLI path to a target. `None` and `-` select stdout.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != STDIO_ARG => Self::File(path),
            _ => Self::Stdout,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Stdout => "<stdout>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }

    /// Final path component of a file target.
    ///
    /// Returns `None` for stdout. A file path without a final component
    /// (such as `..`) has an empty base name.
    pub fn base_name(&self) -> Option<String> {
        self.path().map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}
