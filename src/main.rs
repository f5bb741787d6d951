use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{handle_expense_command, run_menu, ExpenseCommands};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::services::ExpenseService;
use expense_ledger::storage::ExpenseStore;
use expense_ledger::tui::run_form;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense ledger backed by a CSV file",
    long_about = "Record dated, categorized expenses in a CSV file and review them \
                  from a text menu, a terminal form, or one-shot subcommands."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log informational messages (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive text menu (default)
    Menu,

    /// Launch the terminal form
    #[command(alias = "form")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Create the ledger file and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.ledger_path(&paths));
    log::debug!("Using ledger {}", ledger_path.display());

    let store = ExpenseStore::new(ledger_path);
    let service = ExpenseService::new(&store, &settings);
    let currency = settings.currency_symbol.as_str();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            run_menu(&service, currency, io::stdin().lock(), io::stdout())?;
        }
        Commands::Tui => run_form(&service, currency)?,
        Commands::Expense(cmd) => handle_expense_command(&service, &settings, cmd)?,
        Commands::Init => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
            }
            if store.initialize()? {
                println!("Created {} with headers.", store.path().display());
            } else {
                println!("Ledger already exists at {}", store.path().display());
            }
        }
        Commands::Config => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency:          {}", settings.currency_symbol);
            let formats = &settings.date_formats;
            println!("  Menu add dates:    {}", formats.menu_add);
            println!("  Menu edit dates:   {}", formats.menu_edit);
            println!("  Form add dates:    {}", formats.form_add);
            println!("  Form edit dates:   {}", formats.form_edit);
        }
    }

    Ok(())
}
