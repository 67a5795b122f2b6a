//! DIP API client - command-line entry point
//!
//! Parses arguments, loads settings, and runs exactly one command.

mod cli;
mod commands;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use dip_infrastructure::SettingsRepository;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, ConfigCommands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let repo = match &cli.config {
        Some(path) => SettingsRepository::with_path(path),
        None => SettingsRepository::new(),
    };

    let mut out = io::stdout();
    let mut err = io::stderr();

    match &cli.command {
        Commands::Fetch(args) => {
            let settings = args.apply_overrides(repo.load().await?);
            let use_case = commands::fetch_use_case(settings)?;
            Ok(commands::fetch(&use_case, args, &mut out, &mut err).await?)
        }
        Commands::Resources => {
            commands::resources(&mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let settings = repo.load().await?;
                commands::config_show(&repo, &settings, &mut out)?;
                Ok(ExitCode::SUCCESS)
            }
            ConfigCommands::Init { force } => commands::config_init(&repo, *force, &mut out).await,
        },
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
