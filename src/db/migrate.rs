use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result, Transaction, TransactionBehavior};

/// A schema step, applied once and recorded in `log` as `migration_applied`.
struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260105_0001_create_ledger_tables",
        message: "Created ledger tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS piano_sessions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            minutes     INTEGER NOT NULL CHECK(minutes > 0),
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS transactions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            type        TEXT NOT NULL CHECK(type IN ('piano','test','incident')),
            amount      INTEGER NOT NULL,
            description TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS weekly_awards (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            week_start      TEXT NOT NULL UNIQUE,
            transaction_id  INTEGER NOT NULL
                            REFERENCES transactions(id) ON DELETE CASCADE,
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tests (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            subject     TEXT NOT NULL,
            score       REAL NOT NULL CHECK(score >= 0),
            max_score   REAL NOT NULL CHECK(max_score > 0),
            awarded     INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS incidents (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            note        TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_piano_sessions_date ON piano_sessions(date);
        CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date, id);
        CREATE INDEX IF NOT EXISTS idx_weekly_awards_tx ON weekly_awards(transaction_id);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Versions not yet recorded in `log`, in application order.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Run one migration and record it. The caller owns the transaction.
fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{} failed: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.message],
    )?;
    Ok(())
}

/// Zip the database file before upgrading a schema that already holds data.
fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use std::path::Path;

    let src = Path::new(db_path);
    let name = format!(
        "{}-backup_db_pre_migration.zip",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let dest = src.with_file_name(name);

    crate::core::backup::zip_file(src, &dest)
        .map_err(|e| AppError::Migration(format!("pre-migration backup failed: {}", e)))?;

    success(format!("📦 Backup created: {}", dest.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). The pending list is re-read under an IMMEDIATE
/// transaction, so two processes opening a fresh database apply each
/// migration once; all pending steps commit together.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    if pending_migrations(conn)?.is_empty() {
        return Ok(());
    }

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

    let pending = pending_migrations(&tx)?;
    if pending.is_empty() {
        // another connection migrated first
        return Ok(());
    }

    // 2) Upgrading a populated DB → safety copy first
    if table_exists(&tx, "transactions")? {
        warning("Existing schema detected, creating safety backup before migration...");

        let db_path: String = tx
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path, backup skipped.");
        }
    }

    // 3) Apply in order
    for m in MIGRATIONS.iter().filter(|m| pending.contains(&m.version)) {
        apply(&tx, m)?;
    }
    tx.commit()?;

    for v in &pending {
        success(format!("Migration applied: {}", v));
    }
    Ok(())
}
