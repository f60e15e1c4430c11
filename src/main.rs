use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use devref::api::{ApiClient, HttpTransport};
use devref::cli::{self, Cli};
use devref::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
        config.normalize();
    }

    let client = ApiClient::new(HttpTransport::new(&config)?);
    cli::handle_command(cli.command, &client, &config)?;

    Ok(())
}
