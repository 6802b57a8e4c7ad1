use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rewardlog
/// CLI application to track a child's allowance ledger with SQLite
#[derive(Parser, Debug)]
#[command(
    name = "rewardlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small reward ledger: piano practice goals, test scores and incidents, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print results as JSON on stdout
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Report keys missing from the configuration file
        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        /// Add missing keys with their default values
        #[arg(long = "migrate", help = "Add missing keys with default values")]
        migrate: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        /// Apply pending schema migrations
        #[arg(long = "migrate")]
        migrate: bool,

        /// Run PRAGMA integrity_check
        #[arg(long = "check")]
        check: bool,

        /// Compact the database file
        #[arg(long = "vacuum")]
        vacuum: bool,

        /// Print size, row counts and balance
        #[arg(long = "info")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a piano practice session
    Piano {
        /// Date (YYYY-MM-DD or "today")
        date: String,

        /// Minutes practiced (must be > 0)
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Record a test score
    Test {
        /// Date (YYYY-MM-DD or "today")
        date: String,

        /// Subject name
        subject: String,

        /// Points obtained
        #[arg(allow_negative_numbers = true)]
        score: f64,

        /// Points available (must be > 0)
        #[arg(allow_negative_numbers = true)]
        max_score: f64,
    },

    /// Record an incident (deducts the configured penalty)
    Incident {
        /// Date (YYYY-MM-DD or "today")
        date: String,

        /// Optional note describing what happened
        #[arg(long, short = 'n')]
        note: Option<String>,
    },

    /// Delete a transaction by id
    Del {
        /// Transaction id (see `show`)
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Erase every ledger record
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show balance and every record
    Show,

    /// Print the current balance
    Balance,

    /// Show piano progress for a week
    Week {
        /// Any date in the week (default: today)
        date: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup as .zip
        #[arg(long)]
        compress: bool,

        /// Overwrite without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the transaction log
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2026")
        /// - YYYY-MM              → entire month (e.g. "2026-02")
        /// - YYYY-MM-DD           → specific day  (e.g. "2026-02-02")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2026-01:2026-03")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2026-02-01:2026-02-15")
        ///
        /// Special value:
        /// - all                   → every transaction
        ///
        /// If omitted, all transactions are exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
