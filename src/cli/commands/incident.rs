use super::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::IncidentLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::print_json;
use crate::utils::amount2readable;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Incident { date, note } = cmd {
        let d = parse_date_arg(date)?;
        let mut pool = db::open(&cfg.database)?;

        let outcome = IncidentLogic::apply(&mut pool, &cfg.rules, d, note.as_deref())?;

        if json {
            return print_json(&outcome);
        }

        warning(format!(
            "Incident recorded for {} ({})",
            d,
            amount2readable(cfg.rules.incident_amount())
        ));
    }

    Ok(())
}
