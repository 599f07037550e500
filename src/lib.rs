//! iptareas library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! migration modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Migrate { .. } => cli::commands::migrate::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // input directory override from the command line
    if let Some(archivos) = &cli.archivos {
        cfg.archivos = archivos.clone();
    }

    dispatch(&cli, &cfg)
}
