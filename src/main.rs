mod cli;
mod commands;
mod config;
mod confirm;
mod disk_client;
mod error;
mod filter;
mod models;
mod report;
#[cfg(test)]
mod test_support;

use std::{env, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::DiskConfig;
use disk_client::create_client;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli, |key| env::var(key).ok()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,yadisk_folders=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one command. `Ok(false)` and `Err` both map to a failing exit code.
/// Configuration, and with it the token check, is resolved before any request.
async fn run<F>(cli: &Cli, lookup: F) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let config = DiskConfig::load_from_cli(cli, lookup)?;
    let client = create_client(&config)?;

    match &cli.command {
        Commands::Check { name, path } => {
            commands::check::check_folder(&client, path, name, config.limit, cli.verbose).await
        }
        Commands::List { path } => {
            commands::list::list_folders(&client, path, config.limit, cli.verbose).await?;
            Ok(true)
        }
        Commands::Purge { base, suffix, yes } => {
            let skip_prompt = *yes;
            let result = commands::purge::purge_folders(
                &client,
                base,
                suffix,
                config.limit,
                cli.verbose,
                |candidates| {
                    if skip_prompt {
                        Ok(true)
                    } else {
                        confirm::ask_operator(candidates)
                    }
                },
            )
            .await;

            let success = matches!(&result, Ok(summary) if summary.is_success());
            if let Err(e) = &result {
                eprintln!("❌ Error: {:#}", e);
            }
            report::finish(success);
            Ok(success)
        }
    }
}
