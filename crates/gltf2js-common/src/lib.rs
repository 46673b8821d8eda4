//! Convert JSON documents (typically glTF scene descriptions) into JavaScript
//! modules that embed the document as a string constant and export it as the
//! module's default value.

pub mod config;
pub mod document;
pub mod emitter;
pub mod error;
pub mod identifier;
pub mod json;
pub mod pipeline;
pub mod quote;
pub mod stream;
pub mod writer;

pub use config::{EmitOptions, Gltf2JsConfig, UnresolvedIdentifier};
pub use document::{Document, load_document};
pub use emitter::{ModuleEmitter, ModuleText};
pub use error::{ConvertError, Result};
pub use identifier::{ResolvedIdentifier, derive_identifier, resolve_identifier};
pub use pipeline::{ConvertRequest, convert, run};
pub use stream::{InputSource, OutputTarget};
