mod cli;
mod commands;
mod corpus;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let report = match cli.command {
        Command::Import { file, data } => commands::import(&file, &data)?,
        Command::Rebuild { file, out } => commands::rebuild(&file, &out)?,
        Command::Renumber { file } => commands::renumber(&file)?,
        Command::Show { data, count } => commands::show(&data, count)?,
        Command::Dedupe {
            data,
            threshold,
            write,
        } => commands::dedupe(&data, threshold, write)?,
    };
    print!("{}", report);
    if !report.ends_with('\n') {
        println!();
    }

    Ok(())
}
