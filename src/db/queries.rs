//! Row-level SQL for the five ledger tables.
//!
//! All functions take a `&Connection`; callers that need atomicity pass an
//! open `rusqlite::Transaction` (it derefs to `Connection`).

use crate::errors::{AppError, AppResult};
use crate::models::{Incident, PianoSession, TestRecord, Transaction, TxKind, WeeklyAward};
use crate::utils::date::{DATE_FMT, fmt_date};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub const LEDGER_TABLES: [&str; 5] = [
    "piano_sessions",
    "weekly_awards",
    "tests",
    "incidents",
    "transactions",
];

fn now() -> String {
    Local::now().to_rfc3339()
}

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn get_date(row: &Row, col: &str) -> Result<NaiveDate> {
    let s: String = row.get(col)?;
    NaiveDate::parse_from_str(&s, DATE_FMT).map_err(|_| conversion_err(AppError::InvalidDate(s)))
}

// ---------------------------
// Row mappers
// ---------------------------

pub fn map_piano_session(row: &Row) -> Result<PianoSession> {
    Ok(PianoSession {
        id: row.get("id")?,
        date: get_date(row, "date")?,
        minutes: row.get("minutes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_weekly_award(row: &Row) -> Result<WeeklyAward> {
    Ok(WeeklyAward {
        id: row.get("id")?,
        week_start: get_date(row, "week_start")?,
        transaction_id: row.get("transaction_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_test_record(row: &Row) -> Result<TestRecord> {
    Ok(TestRecord {
        id: row.get("id")?,
        date: get_date(row, "date")?,
        subject: row.get("subject")?,
        score: row.get("score")?,
        max_score: row.get("max_score")?,
        awarded: row.get::<_, i64>("awarded")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn map_incident(row: &Row) -> Result<Incident> {
    Ok(Incident {
        id: row.get("id")?,
        date: get_date(row, "date")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_transaction(row: &Row) -> Result<Transaction> {
    let kind_str: String = row.get("type")?;
    let kind = TxKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_err(AppError::Other(format!(
            "Invalid transaction type: {}",
            kind_str
        )))
    })?;

    Ok(Transaction {
        id: row.get("id")?,
        date: get_date(row, "date")?,
        kind,
        amount: row.get("amount")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
    })
}

fn collect<T>(conn: &Connection, sql: &str, f: fn(&Row) -> Result<T>) -> AppResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], f)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Piano sessions / weekly awards
// ---------------------------

pub fn insert_piano_session(conn: &Connection, date: &NaiveDate, minutes: i64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO piano_sessions (date, minutes, created_at) VALUES (?1, ?2, ?3)",
        params![fmt_date(date), minutes, now()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Sum of minutes for sessions dated within `[from, to]` (inclusive).
pub fn sum_piano_minutes(conn: &Connection, from: &NaiveDate, to: &NaiveDate) -> AppResult<i64> {
    let total: i64 = conn.query_row(
        "SELECT COALESCE(SUM(minutes), 0) FROM piano_sessions WHERE date BETWEEN ?1 AND ?2",
        params![fmt_date(from), fmt_date(to)],
        |row| row.get(0),
    )?;
    Ok(total)
}

pub fn award_exists(conn: &Connection, week_start: &NaiveDate) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM weekly_awards WHERE week_start = ?1",
            [fmt_date(week_start)],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Fails with a UNIQUE constraint error if the week is already awarded.
pub fn insert_weekly_award(
    conn: &Connection,
    week_start: &NaiveDate,
    transaction_id: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO weekly_awards (week_start, transaction_id, created_at) VALUES (?1, ?2, ?3)",
        params![fmt_date(week_start), transaction_id, now()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Remove the award credited by `transaction_id`; returns its week, if any.
pub fn delete_award_for_transaction(
    conn: &Connection,
    transaction_id: i64,
) -> AppResult<Option<NaiveDate>> {
    let award = conn
        .query_row(
            "SELECT id, week_start, transaction_id, created_at
             FROM weekly_awards WHERE transaction_id = ?1",
            [transaction_id],
            map_weekly_award,
        )
        .optional()?;

    let Some(award) = award else {
        return Ok(None);
    };

    conn.execute("DELETE FROM weekly_awards WHERE id = ?1", [award.id])?;
    Ok(Some(award.week_start))
}

// ---------------------------
// Tests / incidents
// ---------------------------

pub fn insert_test_record(
    conn: &Connection,
    date: &NaiveDate,
    subject: &str,
    score: f64,
    max_score: f64,
    awarded: bool,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tests (date, subject, score, max_score, awarded, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            fmt_date(date),
            subject,
            score,
            max_score,
            if awarded { 1 } else { 0 },
            now()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_incident(conn: &Connection, date: &NaiveDate, note: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO incidents (date, note, created_at) VALUES (?1, ?2, ?3)",
        params![fmt_date(date), note, now()],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Transactions
// ---------------------------

pub fn insert_transaction(conn: &Connection, tx: &Transaction) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO transactions (date, type, amount, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            fmt_date(&tx.date),
            tx.kind.to_db_str(),
            tx.amount,
            tx.description,
            tx.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_transaction(conn: &Connection, id: i64) -> AppResult<Option<Transaction>> {
    let tx = conn
        .query_row(
            "SELECT id, date, type, amount, description, created_at
             FROM transactions WHERE id = ?1",
            [id],
            map_transaction,
        )
        .optional()?;
    Ok(tx)
}

pub fn delete_transaction(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM transactions WHERE id = ?1", [id])?;
    Ok(n > 0)
}

/// Balance = sum of every transaction amount; never stored.
pub fn balance(conn: &Connection) -> AppResult<i64> {
    let total: i64 = conn.query_row(
        "SELECT COALESCE(SUM(amount), 0) FROM transactions",
        [],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Sum of amounts dated strictly before `date`.
pub fn balance_before(conn: &Connection, date: &NaiveDate) -> AppResult<i64> {
    let total: i64 = conn.query_row(
        "SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE date < ?1",
        [fmt_date(date)],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Transactions dated within optional inclusive bounds, oldest first.
pub fn load_transactions_between(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Transaction>> {
    let (from, to) = match bounds {
        Some((a, b)) => (fmt_date(&a), fmt_date(&b)),
        None => ("0000-01-01".to_string(), "9999-12-31".to_string()),
    };

    let mut stmt = conn.prepare(
        "SELECT id, date, type, amount, description, created_at
         FROM transactions
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, id ASC",
    )?;
    let rows = stmt.query_map(params![from, to], map_transaction)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Read-all (date descending, id descending on ties)
// ---------------------------

pub fn load_piano_sessions(conn: &Connection) -> AppResult<Vec<PianoSession>> {
    collect(
        conn,
        "SELECT id, date, minutes, created_at FROM piano_sessions ORDER BY date DESC, id DESC",
        map_piano_session,
    )
}

pub fn load_weekly_awards(conn: &Connection) -> AppResult<Vec<WeeklyAward>> {
    collect(
        conn,
        "SELECT id, week_start, transaction_id, created_at
         FROM weekly_awards ORDER BY week_start DESC, id DESC",
        map_weekly_award,
    )
}

pub fn load_test_records(conn: &Connection) -> AppResult<Vec<TestRecord>> {
    collect(
        conn,
        "SELECT id, date, subject, score, max_score, awarded, created_at
         FROM tests ORDER BY date DESC, id DESC",
        map_test_record,
    )
}

pub fn load_incidents(conn: &Connection) -> AppResult<Vec<Incident>> {
    collect(
        conn,
        "SELECT id, date, note, created_at FROM incidents ORDER BY date DESC, id DESC",
        map_incident,
    )
}

pub fn load_transactions(conn: &Connection) -> AppResult<Vec<Transaction>> {
    collect(
        conn,
        "SELECT id, date, type, amount, description, created_at
         FROM transactions ORDER BY date DESC, id DESC",
        map_transaction,
    )
}

// ---------------------------
// Maintenance
// ---------------------------

/// Empty every ledger table. The internal `log` table is kept.
pub fn clear_ledger(conn: &Connection) -> AppResult<()> {
    // awards first: they reference transactions
    for table in LEDGER_TABLES {
        conn.execute(&format!("DELETE FROM {}", table), [])?;
    }
    Ok(())
}

pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })?;
    Ok(n)
}
