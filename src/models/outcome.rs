//! Results returned by the reward evaluator and the read paths.
//! Field names serialize in camelCase for `--json` output.

use super::records::{Incident, PianoSession, TestRecord, WeeklyAward};
use super::transaction::Transaction;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PianoOutcome {
    pub awarded: bool,
    pub week_minutes: i64,
    #[serde(skip)]
    pub week_start: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOutcome {
    pub awarded: bool,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Success {
    pub success: bool,
    /// Week whose piano goal became earnable again after a delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reopened_week: Option<NaiveDate>,
}

impl Success {
    pub fn ok() -> Self {
        Self {
            success: true,
            reopened_week: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekStatus {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub minutes: i64,
    pub goal: i64,
    pub remaining: i64,
    pub awarded: bool,
}

/// Everything the ledger holds, plus the derived balance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub balance: i64,
    pub piano_sessions: Vec<PianoSession>,
    pub weekly_awards: Vec<WeeklyAward>,
    pub tests: Vec<TestRecord>,
    pub incidents: Vec<Incident>,
    pub transactions: Vec<Transaction>,
}

impl LedgerSnapshot {
    pub fn is_empty(&self) -> bool {
        self.piano_sessions.is_empty()
            && self.weekly_awards.is_empty()
            && self.tests.is_empty()
            && self.incidents.is_empty()
            && self.transactions.is_empty()
    }
}
