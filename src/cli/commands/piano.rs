use super::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PianoLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::print_json;
use crate::utils::date::fmt_date;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Piano { date, minutes } = cmd {
        let d = parse_date_arg(date)?;
        let mut pool = db::open(&cfg.database)?;

        let outcome = PianoLogic::apply(&mut pool, &cfg.rules, d, *minutes)?;

        if json {
            return print_json(&outcome);
        }

        if outcome.awarded {
            success(format!(
                "🎹 Weekly goal met! {} min this week → +{}",
                outcome.week_minutes, cfg.rules.piano_reward
            ));
        } else {
            let goal = cfg.rules.piano_weekly_goal_minutes;
            info(format!(
                "🎹 {} min logged for {}. Week of {}: {}/{} min",
                minutes,
                fmt_date(&d),
                fmt_date(&outcome.week_start),
                outcome.week_minutes,
                goal
            ));
        }
    }

    Ok(())
}
