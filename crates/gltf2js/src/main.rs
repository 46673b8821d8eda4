use clap::Parser;
use gltf2js::commands::run_convert;
use gltf2js::logging::init_logging;
use gltf2js::Cli;
use starbase::{App, AppResult, AppSession};

/// Application session for the gltf2js CLI
#[derive(Clone, Debug)]
struct Gltf2JsSession {
    cli: Cli,
}

impl Gltf2JsSession {
    fn convert(&self) -> AppResult {
        run_convert(&self.cli)
    }
}

// Lifecycle hooks keep their defaults; the conversion runs as the app's
// single execute operation.
#[async_trait::async_trait]
impl AppSession for Gltf2JsSession {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();
    init_logging(&cli.log_options());

    let session = Gltf2JsSession { cli };

    let exit_code = App::default()
        .run(session, |session| async move { session.convert() })
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
