pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

use crate::errors::AppResult;
use pool::DbPool;
use std::fs;
use std::path::Path;

/// Open the database and bring its schema up to date.
pub fn open(path: &str) -> AppResult<DbPool> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let pool = DbPool::new(path)?;
    initialize::init_db(&pool.conn)?;
    Ok(pool)
}
