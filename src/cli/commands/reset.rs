use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ResetLogic;
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, success};
use crate::ui::print_json;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !confirm("Erase ALL sessions, tests, incidents and transactions?")? {
            return Err(AppError::Cancelled("ledger not reset".into()));
        }

        let mut pool = db::open(&cfg.database)?;
        let outcome = ResetLogic::apply(&mut pool)?;

        if json {
            return print_json(&outcome);
        }

        success("Ledger cleared. Balance is now 0.");
    }

    Ok(())
}
