use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchclock
/// CLI application to record clock punches and build monthly timesheets
#[derive(Parser)]
#[command(
    name = "rpunchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time clock CLI: record daily punches and compute the monthly balance using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Test mode for `init`: create the database without writing the config file
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a punch
    Punch {
        /// Moment of the punch (YYYY-MM-DDTHH:MM:SS)
        #[arg(required_unless_present = "now", conflicts_with = "now")]
        timestamp: Option<String>,

        #[arg(long = "now", help = "Punch at the current local time")]
        now: bool,

        #[arg(long = "json", help = "Print the resulting daily record as JSON")]
        json: bool,
    },

    /// Generate the monthly timesheet report
    Report {
        /// Month of the report (YYYY-MM)
        month: String,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,

        #[arg(long, value_name = "FILE", help = "Export the per-day breakdown to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },

    /// List daily records or raw punches
    List {
        #[arg(
            long,
            short,
            help = "Filter by month (YYYY-MM) or day (YYYY-MM-DD); default: current month"
        )]
        period: Option<String>,

        #[arg(long = "moments", help = "List the raw punches (audit trail) instead")]
        moments: bool,
    },
}
