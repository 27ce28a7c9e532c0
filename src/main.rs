use std::process::ExitCode;

// Module declarations
mod builder;
mod cli;
mod config;
mod directory;
mod front_matter;
mod layout;
mod liquid;
mod markdown;
mod minify;
mod server;
mod summary;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    // Run the CLI
    cli::run().await
}
