//! Command line definition

use crate::logging::{LogFormat, LogLevel, LogOptions};
use clap::Parser;
use std::path::PathBuf;

/// Embed a glTF (or any JSON) document in a JavaScript module as its default export
#[derive(Clone, Debug, Parser)]
#[command(name = "gltf2js")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input JSON file (default: standard input, `-` also selects it)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output module file (default: standard output, `-` also selects it)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Export identifier; overrides the name derived from OUTPUT
    #[arg(long, value_name = "NAME")]
    pub variable: Option<String>,

    /// Render `None` when no identifier can be resolved instead of failing
    #[arg(long)]
    pub legacy_unresolved: bool,

    /// Keep non-ASCII characters in the embedded JSON instead of escaping them
    #[arg(long)]
    pub pass_unicode: bool,

    /// Configuration file (default: ./gltf2js.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log verbosity; RUST_LOG takes precedence when set
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            level: self.log_level,
            format: self.log_format,
        }
    }
}
