pub mod outcome;
pub mod records;
pub mod transaction;
pub mod tx_kind;

pub use outcome::{LedgerSnapshot, PianoOutcome, ScoreOutcome, Success, WeekStatus};
pub use records::{Incident, PianoSession, TestRecord, WeeklyAward};
pub use transaction::Transaction;
pub use tx_kind::TxKind;
