//! Convert command
//!
//! Turns the parsed command line and configuration into a conversion request
//! and runs it.

use crate::cli::Cli;
use gltf2js_common::{
    ConvertRequest, Gltf2JsConfig, InputSource, OutputTarget, UnresolvedIdentifier,
};
use miette::IntoDiagnostic;
use starbase::AppResult;
use std::path::Path;

/// Build the request from CLI flags layered over the configuration file.
pub fn build_request(cli: &Cli, config: &Gltf2JsConfig) -> ConvertRequest {
    let mut options = config.emit;
    if cli.legacy_unresolved {
        options.unresolved_identifier = UnresolvedIdentifier::Legacy;
    }
    if cli.pass_unicode {
        options.ensure_ascii = false;
    }

    let request = ConvertRequest::new(
        InputSource::from_arg(cli.input.clone()),
        OutputTarget::from_arg(cli.output.clone()),
    )
    .with_options(options);

    match &cli.variable {
        Some(variable) => request.with_variable(variable.clone()),
        None => request,
    }
}

/// Run the convert command, looking for `gltf2js.toml` in `working_dir`.
pub fn run_convert_in(cli: &Cli, working_dir: &Path) -> AppResult {
    let config = Gltf2JsConfig::resolve(cli.config.as_deref(), working_dir)?;
    let request = build_request(cli, &config);
    gltf2js_common::run(&request)?;
    Ok(None)
}

/// Run the convert command from the current directory.
pub fn run_convert(cli: &Cli) -> AppResult {
    let cwd = std::env::current_dir().into_diagnostic()?;
    run_convert_in(cli, &cwd)
}
