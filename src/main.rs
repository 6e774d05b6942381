//! modelgate - request-dispatch gateway for LLM backends
//!
//! Async gateway service exposing pluggable provider handlers over HTTP

use clap::Parser;
use modelgate::server;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "Request-dispatch gateway for LLM backends")]
struct Args {
    /// Path to the configuration file
    #[arg(
        short,
        long,
        env = "MODELGATE_CONFIG",
        default_value = "config/gateway.yaml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let args = Args::parse();

    match server::builder::run_server(&args.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
