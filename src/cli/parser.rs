use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gymlog
/// CLI application to keep workout records in plain-text year files
#[derive(Parser)]
#[command(
    name = "gymlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A plain-text workout log: Korean-format records, per-year files, exercise stats",
    long_about = None
)]
pub struct Cli {
    /// Override the records directory (useful for tests or a second clone)
    #[arg(global = true, long = "records-dir")]
    pub records_dir: Option<String>,

    /// Run in test mode (no config file update; cache and journal live
    /// inside the records directory)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and records directory
    Init,

    /// Manage the configuration file
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Print the configuration file path
        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Add a workout record
    Add {
        /// Date of the workout (YYYY-MM-DD, or "today")
        date: String,

        /// Exercise lines in record form, one argument per line.
        ///
        /// Supported shapes:
        /// - "레그프레스 120kg 12 x 4"  → weighted, 4 sets
        /// - "벤치프레스 60kg 10 x"     → weighted, set count unknown
        /// - "천국의계단 75층"          → floor climb
        /// - "걷기 30분"                → timed cardio
        #[arg(value_name = "EXERCISE")]
        exercises: Vec<String>,

        /// Repeat the most recent workout on the given date
        #[arg(
            long = "copy-last",
            conflicts_with = "exercises",
            help = "Copy the exercises of the most recent workout"
        )]
        copy_last: bool,
    },

    /// Delete all workouts recorded on a date
    Del {
        /// Date (YYYY-MM-DD) whose workouts should be deleted
        date: String,
    },

    /// List workouts grouped by month
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year  (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY             → year range
        /// - YYYY-MM:YYYY-MM       → month range
        /// - YYYY-MM-DD:YYYY-MM-DD → day range
        ///
        /// Special value:
        /// - all                   → every record file in the directory
        ///
        /// If omitted, the default is the current month.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Show only today's workout (if present)
        #[arg(long = "today", help = "Show only today's workout")]
        now: bool,
    },

    /// Show the exercise frequency database
    Exercises {
        /// Limit the statistics to a period (same formats as list --period)
        #[arg(
            long,
            short,
            help = "Limit stats to a year/month/day or a custom range"
        )]
        period: Option<String>,

        /// Show only the N most frequent exercises
        #[arg(long, value_name = "N", help = "Show only the N most frequent exercises")]
        top: Option<usize>,
    },

    /// Print the update journal
    Log {
        /// Print the journal of record-file updates
        #[arg(long = "print", help = "Print the journal of record-file updates")]
        print: bool,
    },

    /// Rewrite a year file in canonical form
    Fmt {
        /// Year to rewrite (defaults to the current year)
        #[arg(long, help = "Year to rewrite (defaults to the current year)")]
        year: Option<i32>,

        /// Only report whether the file would change
        #[arg(long, help = "Only report whether the file would change")]
        check: bool,
    },

    /// Export workout data
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year  (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY             → year range
        /// - YYYY-MM:YYYY-MM       → month range
        /// - YYYY-MM-DD:YYYY-MM-DD → day range
        ///
        /// Special value:
        /// - all                   → export every record file
        ///
        /// If omitted, all records are exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
