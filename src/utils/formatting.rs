//! Formatting utilities used for CLI and export outputs.

/// Signed amount in minor units, e.g. `+50`, `-50`, `0`.
pub fn amount2readable(amount: i64) -> String {
    if amount > 0 {
        format!("+{}", amount)
    } else {
        amount.to_string()
    }
}

/// Render a score without a trailing `.0` for whole numbers (95.0 → "95", 47.5 → "47.5").
pub fn fmt_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Truncate to `max_len` chars, appending "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        format!("{}...", s.chars().take(keep).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_has_sign_only_when_positive() {
        assert_eq!(amount2readable(50), "+50");
        assert_eq!(amount2readable(-50), "-50");
        assert_eq!(amount2readable(0), "0");
    }

    #[test]
    fn fmt_number_drops_zero_fraction() {
        assert_eq!(fmt_number(95.0), "95");
        assert_eq!(fmt_number(47.5), "47.5");
        assert_eq!(fmt_number(0.0), "0");
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 5), "hello");
    }
}
