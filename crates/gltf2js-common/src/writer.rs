//! Module writer

use crate::emitter::ModuleText;
use crate::error::{ConvertError, Result};
use crate::stream::OutputTarget;
use std::fs::File;
use std::io::{self, Write};
use tracing::debug;

/// Write `text` to `writer` in one operation and flush it.
pub fn write_module_to<W: Write>(mut writer: W, text: &ModuleText) -> io::Result<()> {
    writer.write_all(text.as_str().as_bytes())?;
    writer.flush()
}

/// Open `target`, write `text`, and release the handle.
///
/// A file target is created or truncated here, so callers should only get
/// this far once the module text exists.
pub fn write_module(target: &OutputTarget, text: &ModuleText) -> Result<()> {
    let result = match target {
        OutputTarget::Stdout => write_module_to(io::stdout().lock(), text),
        OutputTarget::File(path) => {
            File::create(path).and_then(|file| write_module_to(file, text))
        }
    };
    result.map_err(|e| ConvertError::io(target.name(), e))?;
    debug!(output = %target.name(), bytes = text.len(), "wrote module");
    Ok(())
}
