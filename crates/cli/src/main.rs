mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use sift_core::Config;

use crate::cli::{CliArgs, Command};
use crate::commands::Workspace;

fn main() -> Result<()> {
    sift_core::config::load_dotenv();
    let config = Config::from_env();

    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    config.log_summary();

    let args = CliArgs::parse();
    let ws = Workspace::open(&config, args.object, args.queue, args.references)?;

    let output = match args.command {
        Command::Descriptors => commands::list_descriptors(&ws),
        Command::Decode { query } => commands::decode(&ws, &query)?,
        Command::Encode {
            filters,
            limit,
            offset,
        } => commands::encode(&ws, &filters, limit, offset)?,
        Command::Roundtrip { query } => commands::roundtrip(&ws, &query),
        Command::Save { query } => commands::save(&ws, &query)?,
        Command::Show => commands::show(&ws)?,
    };

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}
