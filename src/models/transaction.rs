use super::tx_kind::TxKind;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate, // ⇔ transactions.date (TEXT "YYYY-MM-DD")
    #[serde(rename = "type")]
    pub kind: TxKind, // ⇔ transactions.type ('piano' | 'test' | 'incident')
    pub amount: i64, // ⇔ transactions.amount (signed, minor units)
    pub description: String,
    pub created_at: String, // ⇔ transactions.created_at (TEXT, ISO8601)
}

impl Transaction {
    /// Build a not-yet-persisted transaction (`id = 0`).
    pub fn new(date: NaiveDate, kind: TxKind, amount: i64, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            date,
            kind,
            amount,
            description: description.into(),
            created_at: Local::now().to_rfc3339(),
        }
    }
}
