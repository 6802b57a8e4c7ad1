use super::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ScoreLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::print_json;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Test {
        date,
        subject,
        score,
        max_score,
    } = cmd
    {
        let d = parse_date_arg(date)?;
        let mut pool = db::open(&cfg.database)?;

        let outcome = ScoreLogic::apply(&mut pool, &cfg.rules, d, subject, *score, *max_score)?;

        if json {
            return print_json(&outcome);
        }

        if outcome.awarded {
            success(format!(
                "📝 {}: {:.0}% → +{}",
                subject.trim(),
                outcome.percentage,
                cfg.rules.test_reward
            ));
        } else {
            info(format!(
                "📝 {}: {:.0}% (reward from {}%)",
                subject.trim(),
                outcome.percentage,
                cfg.rules.test_threshold_percent
            ));
        }
    }

    Ok(())
}
