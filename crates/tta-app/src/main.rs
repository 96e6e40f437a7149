use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod profile;

use self::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = profile::load_config(&cli)?;
    tracing::debug!(language = %config.language, "Configuration loaded");

    match &cli.command {
        Command::Analyze(args) => commands::analyze::run(&config, args),
        Command::Lookup { words } => commands::lookup::run(&config, words),
        Command::Languages => commands::languages::run(&config),
        Command::KnownVariants => commands::known_variants::run(&config),
    }
}

/// Logs go to stderr so exported lists on stdout stay clean
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
