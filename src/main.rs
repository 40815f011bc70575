use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_ledger::cli::{
    handle_add, handle_budget_command, handle_config, handle_dashboard, handle_delete,
    handle_edit, handle_export_command, handle_list, BudgetCommands, ConfigUpdates,
    ExportCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::logging::init_tracing;
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker with category budgets",
    long_about = "Record expenses under a fixed set of categories, set a budget \
                  per category, and get warned when spending nears or passes it."
)]
struct Cli {
    /// Use this ledger file instead of the default data file
    #[arg(long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Transport, Shopping, Other)
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Change an existing expense
    Edit {
        /// Expense number, as shown by `list`
        index: usize,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense number, as shown by `list`
        index: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the ledger
    #[command(alias = "ls")]
    List,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show spending by category and by day
    Dashboard,

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths, updating any settings given
    Config(ConfigUpdates),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = match cli.file {
        Some(file) => Storage::at(file),
        None => Storage::new(&paths),
    };

    match cli.command {
        Commands::Add {
            amount,
            category,
            date,
            note,
        } => handle_add(&storage, &settings, &amount, &category, date, note)?,
        Commands::Edit {
            index,
            amount,
            category,
            date,
            note,
        } => handle_edit(&storage, &settings, index, amount, category, date, note)?,
        Commands::Delete { index, force } => handle_delete(&storage, &settings, index, force)?,
        Commands::List => handle_list(&storage, &settings)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Dashboard => handle_dashboard(&storage, &settings)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Config(updates) => handle_config(&paths, &storage, settings, updates)?,
    }

    Ok(())
}
