pub mod messages;

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Print `value` as a single JSON line (used by `--json`).
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let s = serde_json::to_string(value)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
    println!("{}", s);
    Ok(())
}
