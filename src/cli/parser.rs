use clap::{Parser, Subcommand};

/// Command-line interface definition for rFareLog
/// CLI application to audit monthly transport fee payments with SQLite
#[derive(Parser)]
#[command(
    name = "rfarelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track who paid the monthly transport fee, per month and group, using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Work on this month for a single command (YYYY-MM), without moving
    #[arg(global = true, long = "month", value_name = "YYYY-MM")]
    pub month: Option<String>,

    /// Work on this group for a single command, without switching
    #[arg(global = true, long = "group", value_name = "GROUP")]
    pub group: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

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

    /// Show the roster of the current period
    #[command(visible_alias = "list")]
    Show,

    /// Add a person to the current period (starts as pending)
    Add {
        /// Name of the person; several words are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Flip the payment status of the person at position N
    Toggle {
        /// Position in the roster (1-based, as shown by `show`)
        index: usize,
    },

    /// Mark the person at position N as paid
    Pay { index: usize },

    /// Mark the person at position N as pending
    Unpay { index: usize },

    /// Delete the person at position N
    Del {
        index: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Go to the previous month
    Prev,

    /// Go to the next month
    Next,

    /// Go to a given month (YYYY-MM, or `now`)
    Goto { month: String },

    /// Switch to the other group, or select one by name
    Group { name: Option<String> },

    /// Paid / pending counts for the current period
    Summary,
}
