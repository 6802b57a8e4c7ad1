// src/export/model.rs

use crate::models::Transaction;
use crate::utils::date::fmt_date;
use serde::Serialize;

/// Flat transaction row for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct TransactionExport {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub description: String,
    /// Running balance after this row (rows are in date order).
    pub balance: i64,
}

/// Build export rows, accumulating the running balance.
/// `opening` is the balance of everything dated before the first row.
pub(crate) fn to_export_rows(txs: &[Transaction], opening: i64) -> Vec<TransactionExport> {
    let mut running = opening;
    txs.iter()
        .map(|t| {
            running += t.amount;
            TransactionExport {
                id: t.id,
                date: fmt_date(&t.date),
                kind: t.kind.to_db_str().to_string(),
                amount: t.amount,
                description: t.description.clone(),
                balance: running,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxKind;
    use chrono::NaiveDate;

    #[test]
    fn running_balance_accumulates_from_opening() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let txs = vec![
            Transaction::new(d, TxKind::Piano, 50, "a"),
            Transaction::new(d, TxKind::Incident, -50, "b"),
            Transaction::new(d, TxKind::Test, 100, "c"),
        ];
        let rows = to_export_rows(&txs, 10);
        let balances: Vec<i64> = rows.iter().map(|r| r.balance).collect();
        assert_eq!(balances, vec![60, 10, 110]);
        assert_eq!(rows[1].kind, "incident");
    }
}
