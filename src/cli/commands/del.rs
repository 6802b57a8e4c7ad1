use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DeleteLogic;
use crate::db;
use crate::db::queries::find_transaction;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::ui::print_json;
use crate::utils::amount2readable;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = db::open(&cfg.database)?;

        if !*yes {
            let record =
                find_transaction(&pool.conn, *id)?.ok_or(AppError::TransactionNotFound(*id))?;

            let prompt = format!(
                "Delete transaction #{} ({} {} \"{}\")? This action is irreversible.",
                record.id,
                record.date,
                amount2readable(record.amount),
                record.description
            );

            if !confirm(&prompt)? {
                return Err(AppError::Cancelled(format!(
                    "transaction #{} not deleted",
                    id
                )));
            }
        }

        let outcome = DeleteLogic::apply(&mut pool, *id)?;

        if json {
            return print_json(&outcome);
        }

        success(format!("Transaction #{} has been deleted.", id));
        if let Some(week) = outcome.reopened_week {
            info(format!("Piano goal for the week of {} can be earned again.", week));
        }
    }

    Ok(())
}
