use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::Success;
use crate::ui::messages::{info, success, warning};
use crate::ui::print_json;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing rewardlog…");
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", &db_path));

    let pool = db::open(&db_path)?;

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        &db_path,
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    if cli.json {
        return print_json(&Success::ok());
    }

    success("rewardlog initialization completed!");
    Ok(())
}
