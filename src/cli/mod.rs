pub mod types;
pub mod commands;
pub mod logging;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::directory::DirectoryStructure;
use crate::utils::error::SiteResult;

/// Run the command-line interface
pub async fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    if !cli.has_action() {
        println!("No arguments provided. Try using `jbmafp --help`");
        return ExitCode::SUCCESS;
    }

    if cli.new && cli.title.is_none() {
        error!("Please provide a title for the new page, e.g. `jbmafp --new \"My first post\"`");
        return ExitCode::FAILURE;
    }

    let dirs = DirectoryStructure::new(&cli.root);

    match run_actions(&cli, &dirs).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the requested actions in order: init, build, server, new
async fn run_actions(cli: &types::Cli, dirs: &DirectoryStructure) -> SiteResult<()> {
    if cli.init {
        commands::handle_init_command(dirs)?;
    }

    if cli.build {
        commands::handle_build_command(dirs)?;
    }

    if cli.server {
        commands::handle_serve_command(dirs).await?;
    }

    if cli.new {
        if let Some(title) = &cli.title {
            commands::handle_new_command(dirs, title)?;
        }
    }

    Ok(())
}
