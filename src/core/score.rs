use crate::core::rules::{self, RewardRules};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_test_record, insert_transaction};
use crate::errors::AppResult;
use crate::models::{ScoreOutcome, Transaction, TxKind};
use crate::utils::date::fmt_date;
use crate::utils::fmt_number;
use chrono::NaiveDate;

/// Test-score rule: a reward when the percentage reaches the threshold.
pub struct ScoreLogic;

impl ScoreLogic {
    pub fn apply(
        pool: &mut DbPool,
        rules: &RewardRules,
        date: NaiveDate,
        subject: &str,
        score: f64,
        max_score: f64,
    ) -> AppResult<ScoreOutcome> {
        rules.validate()?;
        rules::validate_score(subject, score, max_score)?;
        let subject = subject.trim();

        let percentage = rules::percentage(score, max_score);
        let awarded = rules.test_awarded(percentage);

        let tx = pool.write_tx()?;

        insert_test_record(&tx, &date, subject, score, max_score, awarded)?;

        if awarded {
            let reward = Transaction::new(
                date,
                TxKind::Test,
                rules.test_reward,
                rules::test_description(subject, score, max_score, percentage),
            );
            insert_transaction(&tx, &reward)?;
        }

        ttlog(
            &tx,
            "test",
            &fmt_date(&date),
            &format!(
                "{} {}/{} ({:.1}%){}",
                subject,
                fmt_number(score),
                fmt_number(max_score),
                percentage,
                if awarded {
                    format!(" → +{}", rules.test_reward)
                } else {
                    String::new()
                }
            ),
        )?;

        tx.commit()?;

        Ok(ScoreOutcome {
            awarded,
            percentage,
        })
    }
}
