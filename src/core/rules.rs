//! Reward rules and the pure decisions behind them.
//!
//! Nothing in here touches storage: the `core` logic structs read the
//! accumulated state, ask these helpers what to do, and write the result.

use crate::errors::{AppError, AppResult};
use crate::utils::fmt_number;
use serde::{Deserialize, Serialize};

/// Thresholds and amounts applied by the evaluator (amounts in minor units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardRules {
    pub piano_weekly_goal_minutes: i64,
    pub piano_reward: i64,
    pub test_threshold_percent: f64,
    pub test_reward: i64,
    pub incident_penalty: i64,
}

impl Default for RewardRules {
    fn default() -> Self {
        Self {
            piano_weekly_goal_minutes: 150,
            piano_reward: 50,
            test_threshold_percent: 95.0,
            test_reward: 100,
            incident_penalty: 50,
        }
    }
}

impl RewardRules {
    /// The weekly goal is credited only once: when the week total reaches the
    /// goal and the week has not been awarded yet.
    pub fn piano_goal_reached(&self, week_minutes: i64, already_awarded: bool) -> bool {
        !already_awarded && week_minutes >= self.piano_weekly_goal_minutes
    }

    pub fn test_awarded(&self, percentage: f64) -> bool {
        percentage >= self.test_threshold_percent
    }

    /// Penalty as a signed ledger amount. `validate` keeps the penalty >= 0.
    pub fn incident_amount(&self) -> i64 {
        -self.incident_penalty
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.piano_weekly_goal_minutes <= 0 {
            return Err(AppError::Config(
                "rules.piano_weekly_goal_minutes must be > 0".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.test_threshold_percent) {
            return Err(AppError::Config(
                "rules.test_threshold_percent must be between 0 and 100".into(),
            ));
        }
        // an award must always be a credit, a penalty always a debit
        if self.piano_reward <= 0 {
            return Err(AppError::Config("rules.piano_reward must be > 0".into()));
        }
        if self.test_reward <= 0 {
            return Err(AppError::Config("rules.test_reward must be > 0".into()));
        }
        if self.incident_penalty < 0 {
            return Err(AppError::Config(
                "rules.incident_penalty must be >= 0".into(),
            ));
        }
        Ok(())
    }
}

pub fn percentage(score: f64, max_score: f64) -> f64 {
    score / max_score * 100.0
}

pub fn piano_description(week_minutes: i64) -> String {
    format!("Weekly piano goal met! ({} min)", week_minutes)
}

pub fn test_description(subject: &str, score: f64, max_score: f64, percentage: f64) -> String {
    format!(
        "{} test: {}/{} ({}%)",
        subject,
        fmt_number(score),
        fmt_number(max_score),
        percentage.round() as i64
    )
}

pub fn incident_description(note: &str) -> String {
    if note.is_empty() {
        "Crying incident".to_string()
    } else {
        format!("Incident: {}", note)
    }
}

// ---------------------------
// Input boundary
// ---------------------------

pub fn validate_minutes(minutes: i64) -> AppResult<()> {
    if minutes <= 0 {
        return Err(AppError::Validation(format!(
            "minutes must be greater than 0 (got {})",
            minutes
        )));
    }
    Ok(())
}

pub fn validate_score(subject: &str, score: f64, max_score: f64) -> AppResult<()> {
    if subject.trim().is_empty() {
        return Err(AppError::Validation("subject must not be empty".into()));
    }
    if !score.is_finite() || score < 0.0 {
        return Err(AppError::Validation(format!(
            "score must be a non-negative number (got {})",
            score
        )));
    }
    if !max_score.is_finite() || max_score <= 0.0 {
        return Err(AppError::Validation(format!(
            "max score must be greater than 0 (got {})",
            max_score
        )));
    }
    Ok(())
}
