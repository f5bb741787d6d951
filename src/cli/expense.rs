//! Expense CLI commands
//!
//! Non-interactive access to every store operation. Dates typed here follow
//! the text menu's formats.

use clap::Subcommand;

use crate::config::{EntryPoint, Settings};
use crate::display::{format_expense_list, format_removed, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::RecordEdit;
use crate::services::{ExpenseInput, ExpenseService};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Expense date (menu add format, DD-MM-YYYY by default)
        date: String,
        /// Category label
        category: String,
        /// Amount (e.g. "12.50", "-3" for a refund)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List all expenses in ledger order
    List,
    /// Show totals per category
    Summary,
    /// Remove the expense at a position (as shown by `list`, starting at 1)
    Remove {
        /// 1-based position
        position: usize,
    },
    /// Edit the expense at a position; omitted fields are kept
    Edit {
        /// 1-based position
        position: usize,
        /// New date (menu edit format, YYYY-MM-DD by default)
        #[arg(long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount; an unparseable value keeps the old amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    service: &ExpenseService,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            amount,
            description,
        } => {
            let input = ExpenseInput::new(date, category, amount, description);
            let new = service.add(EntryPoint::MenuAdd, &input)?;
            println!(
                "Expense of {:.2} {} added successfully!",
                new.amount(),
                currency
            );
        }

        ExpenseCommands::List => match service.list() {
            Ok(records) => print!("{}", format_expense_list(&records, currency)),
            Err(LedgerError::NotFound(_)) => {
                println!("No expenses file found. Please add an expense.")
            }
            Err(e) => return Err(e),
        },

        ExpenseCommands::Summary => match service.summary() {
            Ok(totals) => print!("{}", format_summary(&totals, currency)),
            Err(LedgerError::NotFound(_)) => {
                println!("No expenses file found. Please add some expenses first.")
            }
            Err(e) => return Err(e),
        },

        ExpenseCommands::Remove { position } => {
            let removed = service.remove(position)?;
            println!("{}", format_removed(&removed, currency));
        }

        ExpenseCommands::Edit {
            position,
            date,
            category,
            amount,
            description,
        } => {
            let edit = RecordEdit {
                date,
                category,
                amount,
                description,
            };
            if edit.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let outcome = service.edit(EntryPoint::MenuEdit, position, &edit)?;
            if outcome.amount_retained() {
                println!("Invalid amount. Keeping previous value.");
            }
            println!("Expense #{} updated successfully!", position);
        }
    }

    Ok(())
}
