//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::serve;
use clap::Parser;
use std::env;

/// Perch is a small posting and payments web application.
/// Run `perch serve` to start the HTTP server.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Perch cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the Perch web application
    Serve {
        /// Port on which to serve the application.
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

///
fn init_tracing() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind to the requested port.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();

    match cli.subcommands {
        Subcommands::Serve { port } => serve(port),
    }
}
