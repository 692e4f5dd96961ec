use crate::export::ExportFormat;
use crate::models::settings::parse_bonus_hours;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
/// Offline CLI to record work shifts and driving bonus hours
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record work shifts, apply a driving bonus and summarize worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Save a new work entry
    Add {
        /// Job or client name
        #[arg(long, short = 'c')]
        client: String,

        /// Start time (HH:MM or h:MM AM/PM)
        #[arg(long, short = 's')]
        start: String,

        /// End time (HH:MM or h:MM AM/PM); earlier than start means next day
        #[arg(long, short = 'e')]
        end: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Answer "yes" to the bonus question (adds the configured bonus hours)
        #[arg(long)]
        driving: bool,

        /// Show the computed hours without saving
        #[arg(long)]
        preview: bool,
    },

    /// Edit an existing entry (hours are recomputed with the current bonus)
    Edit {
        /// Entry id or unique id prefix (see `list`)
        id: String,

        #[arg(long, short = 'c')]
        client: Option<String>,

        #[arg(long, short = 'd')]
        date: Option<String>,

        #[arg(long, short = 's')]
        start: Option<String>,

        #[arg(long, short = 'e')]
        end: Option<String>,

        #[arg(long, conflicts_with = "no_driving")]
        driving: bool,

        #[arg(long = "no-driving")]
        no_driving: bool,
    },

    /// Delete one entry
    Del {
        /// Entry id or unique id prefix (see `list`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete all entries (settings are kept)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List entries
    List {
        /// Show only today's entries
        #[arg(long, conflicts_with = "date")]
        today: bool,

        /// Show only entries for this date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Show dashboard statistics
    Stats,

    /// View or change the bonus question settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        /// Bonus question text
        #[arg(long)]
        question: Option<String>,

        /// Bonus hours (may be zero or negative)
        #[arg(
            long = "bonus-hours",
            allow_negative_numbers = true,
            value_parser = bonus_hours_arg
        )]
        bonus_hours: Option<f64>,

        /// Label of the "yes" answer
        #[arg(long = "yes-text")]
        yes_text: Option<String>,

        /// Label of the "no" answer
        #[arg(long = "no-text")]
        no_text: Option<String>,

        /// Display format for times: 12h or 24h
        #[arg(long = "time-format")]
        time_format: Option<String>,
    },

    /// Export entries
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file or directory (absolute path); stdout if omitted
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

fn bonus_hours_arg(s: &str) -> Result<f64, String> {
    parse_bonus_hours(s).map_err(|e| e.to_string())
}
