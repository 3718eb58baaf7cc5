mod catalog;
mod commands;
mod config;
mod models;
mod registration;
mod seed;
mod web;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Mergington High School activities — sign students up for extracurriculars.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log every request and rejected registration
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the activities API server
    ///
    /// Examples:
    ///   serve                          — built-in activities on 0.0.0.0:8000
    ///   serve -c school.toml           — activities and address from config
    ///   serve -a 127.0.0.1:3000 -s web — custom address and static directory
    Serve {
        /// Path to config file (optional)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Listen address, overrides [server].addr
        #[arg(short = 'a', long)]
        addr: Option<String>,

        /// Directory served under /static, overrides [server].static_dir
        #[arg(short = 's', long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the activity catalog the server would start with, as JSON
    Catalog {
        /// Path to config file (optional)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &cli.command {
        Command::Serve {
            config,
            addr,
            static_dir,
        } => {
            let cfg = config::load_optional(config.as_deref())?;
            commands::run_serve(&cfg, addr.as_deref(), static_dir.as_deref()).await?;
        }
        Command::Catalog { config } => {
            let cfg = config::load_optional(config.as_deref())?;
            commands::run_catalog(&cfg)?;
        }
    }

    Ok(())
}
