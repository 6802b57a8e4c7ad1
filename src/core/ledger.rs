use crate::core::rules::RewardRules;
use crate::db::pool::DbPool;
use crate::db::queries::{
    award_exists, balance, load_incidents, load_piano_sessions, load_test_records,
    load_transactions, load_weekly_awards, sum_piano_minutes,
};
use crate::errors::AppResult;
use crate::models::{LedgerSnapshot, WeekStatus};
use chrono::NaiveDate;

/// Read paths: balance, full snapshot, weekly progress.
pub struct LedgerLogic;

impl LedgerLogic {
    /// Recomputed from the transaction log on every call.
    pub fn balance(pool: &mut DbPool) -> AppResult<i64> {
        balance(&pool.conn)
    }

    /// Balance plus every collection. Reads happen in one transaction so the
    /// balance always matches the listed transactions.
    pub fn snapshot(pool: &mut DbPool) -> AppResult<LedgerSnapshot> {
        let tx = pool.conn.transaction()?;

        let snapshot = LedgerSnapshot {
            balance: balance(&tx)?,
            piano_sessions: load_piano_sessions(&tx)?,
            weekly_awards: load_weekly_awards(&tx)?,
            tests: load_test_records(&tx)?,
            incidents: load_incidents(&tx)?,
            transactions: load_transactions(&tx)?,
        };

        tx.commit()?;
        Ok(snapshot)
    }

    pub fn week_status(
        pool: &mut DbPool,
        rules: &RewardRules,
        date: NaiveDate,
    ) -> AppResult<WeekStatus> {
        let (week_start, week_end) = crate::utils::date::week_bounds(date);
        let minutes = sum_piano_minutes(&pool.conn, &week_start, &week_end)?;
        let awarded = award_exists(&pool.conn, &week_start)?;
        let goal = rules.piano_weekly_goal_minutes;

        Ok(WeekStatus {
            week_start,
            week_end,
            minutes,
            goal,
            remaining: (goal - minutes).max(0),
            awarded,
        })
    }
}
