use crate::core::rules::{self, RewardRules};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_incident, insert_transaction};
use crate::errors::AppResult;
use crate::models::{Success, Transaction, TxKind};
use crate::utils::date::fmt_date;
use chrono::NaiveDate;

/// Incidents always cost the penalty; there is no threshold.
pub struct IncidentLogic;

impl IncidentLogic {
    pub fn apply(
        pool: &mut DbPool,
        rules: &RewardRules,
        date: NaiveDate,
        note: Option<&str>,
    ) -> AppResult<Success> {
        rules.validate()?;
        let note = note.map(str::trim).unwrap_or("");
        let description = rules::incident_description(note);

        let tx = pool.write_tx()?;

        insert_incident(&tx, &date, note)?;

        let penalty = Transaction::new(
            date,
            TxKind::Incident,
            rules.incident_amount(),
            description.clone(),
        );
        insert_transaction(&tx, &penalty)?;

        ttlog(
            &tx,
            "incident",
            &fmt_date(&date),
            &format!("{} → {}", description, rules.incident_amount()),
        )?;

        tx.commit()?;
        Ok(Success::ok())
    }
}
