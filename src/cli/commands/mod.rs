pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod incident;
pub mod init;
pub mod log;
pub mod piano;
pub mod reset;
pub mod score;
pub mod show;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Parse a `<DATE>` argument (`YYYY-MM-DD` or `today`).
pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
