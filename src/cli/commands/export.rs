use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = db::open(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, range, *force)?;
    }

    Ok(())
}
