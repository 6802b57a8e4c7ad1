//! rewardlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let json = cli.json;
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Piano { .. } => commands::piano::handle(&cli.command, cfg, json),
        Commands::Test { .. } => commands::score::handle(&cli.command, cfg, json),
        Commands::Incident { .. } => commands::incident::handle(&cli.command, cfg, json),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg, json),
        Commands::Reset { .. } => commands::reset::handle(&cli.command, cfg, json),
        Commands::Show | Commands::Balance | Commands::Week { .. } => {
            commands::show::handle(&cli.command, cfg, json)
        }
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `--json` keeps stdout for the JSON document only
    ui::messages::set_quiet(cli.json);

    // 3️⃣ load config once
    let mut cfg = Config::load()?;

    // 4️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
