//! Conversion pipeline
//!
//! Load → resolve identifier → emit → write. The output destination is only
//! opened after the module text has been built, so a bad input never
//! truncates an existing output file.

use crate::config::EmitOptions;
use crate::document::load_document;
use crate::emitter::{ModuleEmitter, ModuleText};
use crate::error::Result;
use crate::identifier::resolve_identifier;
use crate::stream::{InputSource, OutputTarget};
use crate::writer::write_module;
use std::io::Read;
use tracing::{debug, info};

/// Everything needed for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub input: InputSource,
    pub output: OutputTarget,
    /// Explicit identifier, overriding derivation.
    pub variable: Option<String>,
    pub options: EmitOptions,
}

impl ConvertRequest {
    pub fn new(input: InputSource, output: OutputTarget) -> Self {
        Self {
            input,
            output,
            variable: None,
            options: EmitOptions::default(),
        }
    }

    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }
}

/// Convert the document read from `reader` into module text.
///
/// `output` is only consulted for identifier derivation; nothing is written.
pub fn convert<R: Read>(
    reader: R,
    source_name: &str,
    output: &OutputTarget,
    variable: Option<&str>,
    options: EmitOptions,
) -> Result<ModuleText> {
    let document = load_document(reader, source_name)?;
    let identifier = resolve_identifier(variable, output);
    ModuleEmitter::new(options).emit(&document, &identifier)
}

/// Run a full conversion: open the input, convert, then write the output.
pub fn run(request: &ConvertRequest) -> Result<()> {
    debug!(
        input = %request.input.name(),
        output = %request.output.name(),
        variable = ?request.variable,
        "starting conversion"
    );

    let text = {
        let reader = request.input.open()?;
        convert(
            reader,
            &request.input.name(),
            &request.output,
            request.variable.as_deref(),
            request.options,
        )?
    };

    write_module(&request.output, &text)?;
    info!(
        input = %request.input.name(),
        output = %request.output.name(),
        bytes = text.len(),
        "converted document"
    );
    Ok(())
}
