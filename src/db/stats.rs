use crate::db::pool::DbPool;
use crate::db::queries::{LEDGER_TABLES, balance, count_rows};
use crate::errors::AppResult;
use crate::utils::amount2readable;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, color_for_amount};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in LEDGER_TABLES {
        let n = count_rows(&pool.conn, table)?;
        println!("    {:<15} {}{}{}", table, GREEN, n, RESET);
    }

    //
    // 3) DATE RANGE (transactions)
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM transactions",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) BALANCE
    //
    let bal = balance(&pool.conn)?;
    println!(
        "{}• Balance:{} {}{}{}",
        CYAN,
        RESET,
        color_for_amount(bal),
        amount2readable(bal),
        RESET
    );

    println!();
    Ok(())
}
