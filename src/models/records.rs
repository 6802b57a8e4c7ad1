//! Event records as stored in SQLite.
//! Dates map to TEXT "YYYY-MM-DD", `created_at` to an RFC 3339 timestamp.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PianoSession {
    pub id: i64,
    pub date: NaiveDate,
    pub minutes: i64,
    pub created_at: String,
}

/// Marker that the weekly piano goal has been credited for `week_start`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAward {
    pub id: i64,
    pub week_start: NaiveDate,
    /// Piano transaction that paid the award.
    pub transaction_id: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub subject: String,
    pub score: f64,
    pub max_score: f64,
    pub awarded: bool,
    pub created_at: String,
}

impl TestRecord {
    pub fn percentage(&self) -> f64 {
        self.score / self.max_score * 100.0
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: i64,
    pub date: NaiveDate,
    pub note: String,
    pub created_at: String,
}
