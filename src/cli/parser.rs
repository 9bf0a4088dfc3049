use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for horimetro
/// CLI application to record machine operating-hour readings per fleet
#[derive(Parser)]
#[command(
    name = "horimetro",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record horimeter (operating-hour) readings per fleet, list totals and export to Excel",
    long_about = None
)]
pub struct Cli {
    /// Override record store path (useful for tests or a shared CSV)
    #[arg(global = true, long = "store", value_name = "FILE")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// User for the access gate (when configured)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Password for the access gate (when configured)
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty record store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Record a new horimeter reading
    Add {
        #[arg(long, short = 'o', help = "Operator name")]
        operator: Option<String>,

        #[arg(long, short = 'f', help = "Fleet number (e.g. 230)")]
        fleet: Option<String>,

        #[arg(
            long = "initial",
            short = 'i',
            allow_negative_numbers = true,
            help = "Initial horimeter reading"
        )]
        initial: Option<String>,

        #[arg(
            long = "final",
            short = 'F',
            allow_negative_numbers = true,
            help = "Final horimeter reading"
        )]
        final_reading: Option<String>,

        #[arg(
            long,
            short = 'd',
            help = "Reading date (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS, default: now)"
        )]
        date: Option<String>,
    },

    /// List readings, most recent first, with totals
    List {
        #[arg(long, default_value = "All", help = "Fleet to show, or 'All' ('=code' for a fleet literally named all/todas)")]
        fleet: String,

        #[arg(
            long,
            short = 'r',
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY-MM:YYYY-MM)"
        )]
        range: Option<String>,
    },

    /// Show the fleet choices available for filtering
    Fleets,

    /// Export the filtered readings
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: registros_horimetro.<format>)")]
        file: Option<String>,

        #[arg(long, default_value = "All", help = "Fleet to export, or 'All' ('=code' for a fleet literally named all/todas)")]
        fleet: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'y', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Create a backup copy of the record store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'y', help = "Overwrite the backup file without asking")]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal audit log")]
        print: bool,
    },
}

impl Commands {
    /// Commands that read or write records go through the access gate.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. }
                | Commands::List { .. }
                | Commands::Fleets
                | Commands::Export { .. }
        )
    }
}
