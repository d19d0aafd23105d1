use clap::{Parser, Subcommand};

/// CaterIndent — plans ingredient indents and batch schedules for catering events.
#[derive(Parser, Debug)]
#[command(name = "cater_indent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file.
    #[arg(short, long, default_value = "catalog.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List saved events.
    Events,

    /// Create a new event interactively.
    AddEvent,

    /// Load ingredients and recipes from CSV exports.
    Ingest {
        /// Inventory CSV (ingredients and stock).
        #[arg(long)]
        inventory: Option<String>,

        /// Master recipe CSV (menu items and per-portion quantities).
        #[arg(long)]
        recipes: Option<String>,
    },

    /// Compute the ingredient indent for an event.
    Indent {
        /// Event id.
        #[arg(short, long)]
        event: u32,

        /// Menu item ids; selected interactively when omitted.
        #[arg(short, long, num_args = 0..)]
        items: Vec<u32>,

        /// Also print the 60/30/10 batch schedule per ingredient.
        #[arg(long)]
        batches: bool,
    },

    /// Split a single quantity into the 60/30/10 batch schedule.
    Batches {
        /// Total quantity to split.
        quantity: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Events
    }
}
