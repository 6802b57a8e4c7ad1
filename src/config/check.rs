//! Configuration file checks: report keys missing from an older file and
//! rewrite it with defaults filled in.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const TOP_LEVEL_KEYS: &[&str] = &["database", "separator_char", "rules"];
const RULE_KEYS: &[&str] = &[
    "piano_weekly_goal_minutes",
    "piano_reward",
    "test_threshold_percent",
    "test_reward",
    "incident_penalty",
];

fn has_key(map: &Mapping, key: &str) -> bool {
    map.contains_key(Value::String(key.to_string()))
}

/// List the dotted keys absent from a YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {}", e)))?;

    let empty = Mapping::new();
    let map = yaml.as_mapping().unwrap_or(&empty);

    let mut missing: Vec<String> = TOP_LEVEL_KEYS
        .iter()
        .filter(|k| !has_key(map, k))
        .map(|k| k.to_string())
        .collect();

    let rules = map
        .get(Value::String("rules".to_string()))
        .and_then(Value::as_mapping);

    if let Some(rules) = rules {
        missing.extend(
            RULE_KEYS
                .iter()
                .filter(|k| !has_key(rules, k))
                .map(|k| format!("rules.{}", k)),
        );
    }

    Ok(missing)
}

pub fn check_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    missing_keys(&content)
}

/// Rewrite the config file so that every key is present.
/// Returns true when the file changed.
pub fn migrate_file(path: &Path) -> AppResult<bool> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if missing_keys(&content)?.is_empty() {
        return Ok(false);
    }

    let cfg = Config::from_yaml(&content)?;
    let yaml = serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    Ok(true)
}
