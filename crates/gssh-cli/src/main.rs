//! gssh CLI
//!
//! Command-line interface for managing GlobalSSH instances

use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use tracing::debug;

use gssh_cli::{commands, logging, Cli, Config};
use gssh_client::HttpClient;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = Config::locate(cli.config.as_deref())?;
    config.apply_env();
    config.apply_overrides(cli.region.clone(), cli.project_id.clone());

    logging::init(cli.verbose, &config.log_level);

    let credentials = config.credentials()?;
    debug!(public_key = credentials.public_key(), base_url = %config.base_url, "using account");
    let client = HttpClient::new(&config.base_url, credentials, config.timeout())?;
    let params = config.global_params();

    let mut stdout = std::io::stdout().lock();
    match commands::run(cli.command, &client, &params, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            debug!(error = %err, "command failed");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
