//! rFareLog library root.
//! Exposes the roster store, the period controller, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Show | Commands::Summary => commands::show::handle(cli, cfg),
        Commands::Add { .. } => commands::add::handle(cli, cfg),
        Commands::Toggle { .. } | Commands::Pay { .. } | Commands::Unpay { .. } => {
            commands::pay::handle(cli, cfg)
        }
        Commands::Del { .. } => commands::del::handle(cli, cfg),
        Commands::Prev | Commands::Next | Commands::Goto { .. } | Commands::Group { .. } => {
            commands::nav::handle(cli, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once; --db overrides the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
