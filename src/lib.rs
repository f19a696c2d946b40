//! gymlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Exercises { .. } => cli::commands::exercises::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Fmt { .. } => cli::commands::fmt::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the config once (test mode never reads the user's file)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()
    };

    // 3️⃣ apply the records-dir override from the command line
    if let Some(custom_dir) = &cli.records_dir {
        cfg.records_dir = custom_dir.clone();
    }

    // In test mode the cache and journal live inside the records directory,
    // so a test run never touches the real ~/.gymlog files.
    if cli.test {
        let root = cfg.resolved_records_dir();
        cfg.cache_file = root.join("cache.json").to_string_lossy().to_string();
        cfg.journal_file = root.join("journal.log").to_string_lossy().to_string();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
