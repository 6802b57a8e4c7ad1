use chrono::{Datelike, Duration, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a CLI date: `YYYY-MM-DD` or the literal `today`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

pub fn fmt_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Monday on or before `d` (ISO week start).
pub fn week_start(d: NaiveDate) -> NaiveDate {
    let offset = d.weekday().num_days_from_monday() as i64;
    d - Duration::days(offset)
}

/// Sunday closing the ISO week that contains `d`.
pub fn week_end(d: NaiveDate) -> NaiveDate {
    week_start(d) + Duration::days(6)
}

/// Inclusive `[monday, sunday]` bounds of the week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    (week_start(d), week_end(d))
}

pub fn weekday_str(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    let first_next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)?
    };
    first_next.pred_opt().map(|d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FMT).unwrap()
    }

    #[test]
    fn week_start_of_monday_is_itself() {
        assert_eq!(week_start(d("2026-02-02")), d("2026-02-02"));
    }

    #[test]
    fn week_start_of_sunday_is_previous_monday() {
        assert_eq!(week_start(d("2026-02-08")), d("2026-02-02"));
    }

    #[test]
    fn week_start_crosses_month_and_year() {
        assert_eq!(week_start(d("2026-01-01")), d("2025-12-29"));
        assert_eq!(week_start(d("2026-03-01")), d("2026-02-23"));
    }

    #[test]
    fn week_bounds_span_seven_days() {
        let (s, e) = week_bounds(d("2026-02-05"));
        assert_eq!(s, d("2026-02-02"));
        assert_eq!(e, d("2026-02-08"));
    }

    #[test]
    fn parse_date_accepts_iso_and_today() {
        assert_eq!(parse_date("2026-02-02"), Some(d("2026-02-02")));
        assert_eq!(parse_date("today"), Some(today()));
        assert_eq!(parse_date("TODAY"), Some(today()));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("02/02/2026").is_none());
        assert!(parse_date("2026-02-30").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn month_last_day_handles_leap_years() {
        assert_eq!(month_last_day(2024, 2), Some(29));
        assert_eq!(month_last_day(2026, 2), Some(28));
        assert_eq!(month_last_day(2026, 12), Some(31));
        assert_eq!(month_last_day(2026, 13), None);
    }
}
