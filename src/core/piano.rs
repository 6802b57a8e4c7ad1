use crate::core::rules::{self, RewardRules};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    award_exists, insert_piano_session, insert_transaction, insert_weekly_award, sum_piano_minutes,
};
use crate::errors::AppResult;
use crate::models::{PianoOutcome, Transaction, TxKind};
use crate::utils::date::{fmt_date, week_bounds};
use chrono::NaiveDate;

/// Weekly piano goal: log a practice session and credit the week once.
pub struct PianoLogic;

impl PianoLogic {
    /// Record `minutes` of practice on `date`.
    ///
    /// Session insert, week sum, award check and award insert run inside one
    /// IMMEDIATE transaction: a concurrent writer crossing the threshold for
    /// the same week waits for this one to commit and then sees the award.
    /// `weekly_awards.week_start` is UNIQUE, so a second award for a week
    /// fails the whole transaction instead of double-crediting.
    pub fn apply(
        pool: &mut DbPool,
        rules: &RewardRules,
        date: NaiveDate,
        minutes: i64,
    ) -> AppResult<PianoOutcome> {
        rules.validate()?;
        rules::validate_minutes(minutes)?;

        let (week_start, week_end) = week_bounds(date);
        let tx = pool.write_tx()?;

        // 1️⃣ Session is always persisted
        insert_piano_session(&tx, &date, minutes)?;

        // 2️⃣ Week total including this session
        let week_minutes = sum_piano_minutes(&tx, &week_start, &week_end)?;

        // 3️⃣ Award once per week
        let already = award_exists(&tx, &week_start)?;
        let awarded = rules.piano_goal_reached(week_minutes, already);

        if awarded {
            let reward = Transaction::new(
                date,
                TxKind::Piano,
                rules.piano_reward,
                rules::piano_description(week_minutes),
            );
            let tx_id = insert_transaction(&tx, &reward)?;
            insert_weekly_award(&tx, &week_start, tx_id)?;
        }

        let message = if awarded {
            format!(
                "{} min logged, week {} reached {} min → +{}",
                minutes,
                fmt_date(&week_start),
                week_minutes,
                rules.piano_reward
            )
        } else {
            format!(
                "{} min logged, week {} at {} min",
                minutes,
                fmt_date(&week_start),
                week_minutes
            )
        };
        ttlog(&tx, "piano", &fmt_date(&date), &message)?;

        tx.commit()?;

        Ok(PianoOutcome {
            awarded,
            week_minutes,
            week_start,
        })
    }
}
