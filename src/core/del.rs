use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_award_for_transaction, delete_transaction, find_transaction};
use crate::errors::{AppError, AppResult};
use crate::models::Success;
use crate::utils::amount2readable;
use crate::utils::date::fmt_date;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a transaction by id.
    ///
    /// Removing the piano transaction that paid a weekly award also removes
    /// that award, so the week's goal can be earned again. Both deletes
    /// commit together.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Success> {
        let tx = pool.write_tx()?;

        let record = find_transaction(&tx, id)?.ok_or(AppError::TransactionNotFound(id))?;

        // explicit rather than via ON DELETE CASCADE: the week is reported back
        let reopened_week = delete_award_for_transaction(&tx, record.id)?;

        delete_transaction(&tx, id)?;

        ttlog(
            &tx,
            "del",
            &format!("#{}", id),
            &format!(
                "Deleted {} {} ({}){}",
                record.kind.to_db_str(),
                amount2readable(record.amount),
                record.description,
                match reopened_week {
                    Some(ws) => format!(", week {} reopened", fmt_date(&ws)),
                    None => String::new(),
                }
            ),
        )?;

        tx.commit()?;

        Ok(Success {
            success: true,
            reopened_week,
        })
    }
}
