// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

fn bad(r: &str) -> AppError {
    AppError::InvalidDate(format!("unsupported range '{r}'"))
}

/// First and last day covered by a single period token.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad(p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad(p))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad(p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = p.split_once('-').ok_or_else(|| bad(p))?;
            let y: i32 = ys.parse().map_err(|_| bad(p))?;
            let m: u32 = ms.parse().map_err(|_| bad(p))?;
            let last = month_last_day(y, m).ok_or_else(|| bad(p))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| bad(p))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| bad(p))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad(p))?;
            Ok((d, d))
        }
        _ => Err(bad(p)),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(
                "start and end must have same format".into(),
            ));
        }

        let (d1, _) = period_bounds(start)?;
        let (_, d2) = period_bounds(end)?;

        if d2 < d1 {
            return Err(AppError::InvalidDate(format!("range '{r}' ends before it starts")));
        }
        Ok((d1, d2))
    } else {
        period_bounds(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2026").unwrap(), (d(2026, 1, 1), d(2026, 12, 31)));
        assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(
            parse_range("2026-02-02").unwrap(),
            (d(2026, 2, 2), d(2026, 2, 2))
        );
    }

    #[test]
    fn intervals() {
        assert_eq!(
            parse_range("2026-01:2026-02").unwrap(),
            (d(2026, 1, 1), d(2026, 2, 28))
        );
        assert_eq!(
            parse_range("2025:2026").unwrap(),
            (d(2025, 1, 1), d(2026, 12, 31))
        );
    }

    #[test]
    fn rejects_mixed_or_reversed() {
        assert!(parse_range("2026:2026-02").is_err());
        assert!(parse_range("2026-03:2026-01").is_err());
        assert!(parse_range("26-1").is_err());
        assert!(parse_range("2026-13").is_err());
    }
}
