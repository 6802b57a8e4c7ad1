// src/export/logic.rs

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{balance_before, load_transactions_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_export_rows;
use crate::export::range::parse_range;
use crate::ui::messages::{confirm, warning};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High-level export of the transaction log.
pub struct ExportLogic;

impl ExportLogic {
    /// Export transactions.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file (`~/` is expanded)
    /// - `range`: `None`, `"all"` or an expression accepted by `parse_range`
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if path.exists()
            && !force
            && !confirm(format!(
                "The file '{}' already exists. Overwrite?",
                path.display()
            ))?
        {
            return Err(AppError::Cancelled(
                "existing export file not overwritten".into(),
            ));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let txs = load_transactions_between(&pool.conn, bounds)?;

        if txs.is_empty() {
            warning("No transactions found for selected range.");
            return Ok(0);
        }

        // balance carried in from before the range
        let opening = match bounds {
            Some((start, _)) => balance_before(&pool.conn, &start)?,
            None => 0,
        };

        let rows = to_export_rows(&txs, opening);

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} transactions as {}", rows.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rows.len())
    }
}
