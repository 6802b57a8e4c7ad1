use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::clear_ledger;
use crate::errors::AppResult;
use crate::models::Success;

pub struct ResetLogic;

impl ResetLogic {
    /// Wipe all five ledger collections. The audit log survives.
    pub fn apply(pool: &mut DbPool) -> AppResult<Success> {
        let tx = pool.write_tx()?;
        clear_ledger(&tx)?;
        ttlog(&tx, "reset", "", "All ledger tables cleared")?;
        tx.commit()?;
        Ok(Success::ok())
    }
}
