//! gltf2js CLI Library
//!
//! Exposes the command line definition, command runner and logging setup
//! for programmatic use and testing.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::Cli;
