use serde::{Deserialize, Serialize};

/// Origin of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Piano,
    Test,
    Incident,
}

impl TxKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TxKind::Piano => "piano",
            TxKind::Test => "test",
            TxKind::Incident => "incident",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "piano" => Some(TxKind::Piano),
            "test" => Some(TxKind::Test),
            "incident" => Some(TxKind::Incident),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TxKind::Piano => "🎹",
            TxKind::Test => "📝",
            TxKind::Incident => "😢",
        }
    }
}
