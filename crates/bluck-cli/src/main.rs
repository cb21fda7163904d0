//! bluck - movie co-star graph and mood search.
//!
//! Parses arguments, loads configuration, initializes logging and dispatches
//! the command. Command output goes to stdout, logs and errors to stderr.

use clap::Parser;
use miette::Result;

use bluck_cli::context::ServiceContext;
use bluck_cli::{CliError, cli, commands, error, logger};
use bluck_config::BluckConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // The config may set the log level, so it is read before logging starts
    let config = BluckConfig::load(args.config.as_deref());
    let config_level = config
        .as_ref()
        .ok()
        .and_then(|c| c.settings.log_level.as_deref());
    logger::init_logger(args.verbose, args.quiet, args.no_color, config_level);

    run(args, config.map_err(CliError::from))
        .await
        .map_err(error::cli_error_to_miette)
}

async fn run(args: cli::Cli, config: bluck_cli::Result<BluckConfig>) -> bluck_cli::Result<()> {
    let config = config?;
    let output = match args.command {
        cli::Command::Config => commands::config::execute(&config)?,
        command => {
            let ctx = ServiceContext::from_files(config, &args.catalog, &args.centroids)?;
            commands::run(command, &ctx, args.strict).await?
        }
    };
    println!("{}", output.render()?);
    Ok(())
}
