pub mod backup;
pub mod del;
pub mod incident;
pub mod ledger;
pub mod log;
pub mod piano;
pub mod reset;
pub mod rules;
pub mod score;

pub use del::DeleteLogic;
pub use incident::IncidentLogic;
pub use ledger::LedgerLogic;
pub use piano::PianoLogic;
pub use reset::ResetLogic;
pub use rules::RewardRules;
pub use score::ScoreLogic;
