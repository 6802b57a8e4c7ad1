//! Read-only views: `show`, `balance`, `week`.

use super::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LedgerLogic;
use crate::db;
use crate::errors::AppResult;
use crate::models::{LedgerSnapshot, WeekStatus};
use crate::ui::messages::header;
use crate::ui::print_json;
use crate::utils::colors::{GREY, RESET, color_for_amount, colorize_flag, colorize_optional};
use crate::utils::date::{self, fmt_date, weekday_str};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use crate::utils::{amount2readable, fmt_number};
use serde::Serialize;

#[derive(Serialize)]
struct BalanceView {
    balance: i64,
}

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    let mut pool = db::open(&cfg.database)?;

    match cmd {
        Commands::Show => {
            let snapshot = LedgerLogic::snapshot(&mut pool)?;
            if json {
                return print_json(&snapshot);
            }
            print_snapshot(&snapshot, &cfg.separator_char);
        }
        Commands::Balance => {
            let balance = LedgerLogic::balance(&mut pool)?;
            if json {
                return print_json(&BalanceView { balance });
            }
            println!("💰 Balance: {}", colored_amount(balance));
        }
        Commands::Week { date: d } => {
            let day = match d {
                Some(s) => parse_date_arg(s)?,
                None => date::today(),
            };
            let status = LedgerLogic::week_status(&mut pool, &cfg.rules, day)?;
            if json {
                return print_json(&status);
            }
            print_week(&status);
        }
        _ => {}
    }

    Ok(())
}

fn colored_amount(v: i64) -> String {
    format!("{}{}{}", color_for_amount(v), amount2readable(v), RESET)
}

fn print_snapshot(s: &LedgerSnapshot, sep: &str) {
    println!("💰 Balance: {}\n", colored_amount(s.balance));

    if s.is_empty() {
        println!("{GREY}No records yet.{RESET}");
        return;
    }

    header("TRANSACTIONS");
    let mut t = Table::new(
        vec![
            Column::new("ID", 5),
            Column::new("DATE", 10),
            Column::new("TYPE", 11),
            Column::new("AMOUNT", 7),
            Column::new("DESCRIPTION", 45),
        ],
        sep,
    );
    for tx in &s.transactions {
        t.add_row(vec![
            tx.id.to_string(),
            fmt_date(&tx.date),
            format!("{} {}", tx.kind.icon(), tx.kind.to_db_str()),
            colored_amount(tx.amount),
            truncate(&tx.description, 45),
        ]);
    }
    println!("{}", t.render());

    header("PIANO SESSIONS");
    let mut t = Table::new(
        vec![
            Column::new("ID", 5),
            Column::new("DATE", 10),
            Column::new("DAY", 4),
            Column::new("MINUTES", 7),
        ],
        sep,
    );
    for p in &s.piano_sessions {
        t.add_row(vec![
            p.id.to_string(),
            fmt_date(&p.date),
            weekday_str(&p.date).to_string(),
            p.minutes.to_string(),
        ]);
    }
    println!("{}", t.render());

    header("WEEKLY AWARDS");
    let mut t = Table::new(
        vec![
            Column::new("ID", 5),
            Column::new("WEEK START", 10),
            Column::new("TX", 5),
        ],
        sep,
    );
    for a in &s.weekly_awards {
        t.add_row(vec![
            a.id.to_string(),
            fmt_date(&a.week_start),
            format!("#{}", a.transaction_id),
        ]);
    }
    println!("{}", t.render());

    header("TESTS");
    let mut t = Table::new(
        vec![
            Column::new("ID", 5),
            Column::new("DATE", 10),
            Column::new("SUBJECT", 16),
            Column::new("SCORE", 11),
            Column::new("%", 4),
            Column::new("AWARDED", 7),
        ],
        sep,
    );
    for r in &s.tests {
        t.add_row(vec![
            r.id.to_string(),
            fmt_date(&r.date),
            truncate(&r.subject, 16),
            format!("{}/{}", fmt_number(r.score), fmt_number(r.max_score)),
            format!("{:.0}", r.percentage()),
            colorize_flag(r.awarded),
        ]);
    }
    println!("{}", t.render());

    header("INCIDENTS");
    let mut t = Table::new(
        vec![
            Column::new("ID", 5),
            Column::new("DATE", 10),
            Column::new("NOTE", 40),
        ],
        sep,
    );
    for i in &s.incidents {
        t.add_row(vec![
            i.id.to_string(),
            fmt_date(&i.date),
            colorize_optional(&truncate(&i.note, 40)),
        ]);
    }
    println!("{}", t.render());
}

fn print_week(w: &WeekStatus) {
    println!(
        "🎹 Week {} → {}",
        fmt_date(&w.week_start),
        fmt_date(&w.week_end)
    );
    println!("   Practiced : {} / {} min", w.minutes, w.goal);
    if w.awarded {
        println!("   Awarded   : {}", colorize_flag(true));
    } else {
        println!("   Remaining : {} min", w.remaining);
        println!("   Awarded   : {}", colorize_flag(false));
    }
}
