//! Interactive text menu
//!
//! A numbered menu over the expense service, reading answers line by line.
//! Input and output are generic so the whole flow can be driven from tests.

use std::io::{BufRead, Write};

use crate::config::EntryPoint;
use crate::display::{format_expense_list, format_numbered_list, format_removed, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_amount, Record, RecordEdit};
use crate::services::{ExpenseInput, ExpenseService};
use crate::storage::EditSession;

const MENU: &str = "\
1. Add Expense
2. View Expenses
3. Summary by Category
4. Remove Expense
5. Edit Expense
6. Exit
";

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    service: &ExpenseService,
    currency: &str,
    input: R,
    output: W,
) -> LedgerResult<()> {
    Menu {
        service,
        currency,
        input,
        output,
    }
    .run()
}

struct Menu<'s, 'a, R, W> {
    service: &'s ExpenseService<'a>,
    currency: &'s str,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, '_, R, W> {
    fn run(&mut self) -> LedgerResult<()> {
        if self.service.store().initialize()? {
            writeln!(
                self.output,
                "Created {} with headers.\n",
                self.service.store().path().display()
            )?;
        }

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };

            let result = match choice.trim() {
                "1" => self.add_expense(),
                "2" => self.view_expenses(),
                "3" => self.show_summary(),
                "4" => self.remove_expense(),
                "5" => self.edit_expense(),
                "6" => {
                    writeln!(self.output, "Exiting!!! See ya!!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Ok(Flow::Continue)
                }
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::EndOfInput) => return Ok(()),
                Err(e) => writeln!(self.output, "Error: {}\n", e)?,
            }
        }
    }

    fn add_expense(&mut self) -> LedgerResult<Flow> {
        let format = self.service.date_format(EntryPoint::MenuAdd);

        let date = loop {
            let Some(date) = self.prompt(&format!("Enter date ({}): ", format.hint()))? else {
                return Ok(Flow::EndOfInput);
            };
            if format.parse(&date).is_ok() {
                break date;
            }
            writeln!(
                self.output,
                "Invalid date format. Please use {}.\n",
                format.hint()
            )?;
        };

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(amount) = self.prompt(&format!("Enter amount ({}): ", self.currency))? else {
            return Ok(Flow::EndOfInput);
        };
        if parse_amount(&amount).is_none() {
            writeln!(self.output, "Invalid amount. Enter a number.\n")?;
            return Ok(Flow::Continue);
        }
        let Some(description) = self.prompt("Enter description (optional): ")? else {
            return Ok(Flow::EndOfInput);
        };

        let input = ExpenseInput::new(date, category, amount, description);
        match self.service.add(EntryPoint::MenuAdd, &input) {
            Ok(new) => writeln!(
                self.output,
                "Expense of {:.2} {} added successfully!\n",
                new.amount(),
                self.currency
            )?,
            Err(LedgerError::InvalidInput(_)) => {
                writeln!(self.output, "Invalid amount. Enter a number.\n")?
            }
            Err(e) => return Err(e),
        }

        Ok(Flow::Continue)
    }

    fn view_expenses(&mut self) -> LedgerResult<Flow> {
        match self.service.list() {
            Ok(records) => {
                writeln!(self.output)?;
                write!(self.output, "{}", format_expense_list(&records, self.currency))?;
                writeln!(self.output)?;
            }
            Err(LedgerError::NotFound(_)) => writeln!(
                self.output,
                "No expenses file found. Please add an expense.\n"
            )?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn show_summary(&mut self) -> LedgerResult<Flow> {
        match self.service.summary() {
            Ok(totals) => {
                writeln!(self.output)?;
                write!(self.output, "{}", format_summary(&totals, self.currency))?;
                writeln!(self.output)?;
            }
            Err(LedgerError::InvalidFormat(_)) => writeln!(
                self.output,
                "CSV file format is invalid. Please check headers.\n"
            )?,
            Err(LedgerError::NotFound(_)) => writeln!(
                self.output,
                "No expenses file found. Please add some expenses first.\n"
            )?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn remove_expense(&mut self) -> LedgerResult<Flow> {
        let Some(records) = self.listing("remove")? else {
            return Ok(Flow::Continue);
        };

        let Some(answer) = self.prompt("Enter the number of the expense to remove: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(position) = parse_selection(&answer, records.len()) else {
            writeln!(self.output, "Invalid selection.\n")?;
            return Ok(Flow::Continue);
        };

        match self.service.remove(position) {
            Ok(removed) => writeln!(
                self.output,
                "{}\n",
                format_removed(&removed, self.currency)
            )?,
            Err(LedgerError::OutOfRange { .. }) => writeln!(self.output, "Invalid selection.\n")?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn edit_expense(&mut self) -> LedgerResult<Flow> {
        let Some(records) = self.listing("edit")? else {
            return Ok(Flow::Continue);
        };

        let Some(answer) = self.prompt("Enter the number of the expense to edit: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(position) = parse_selection(&answer, records.len()) else {
            writeln!(self.output, "Invalid selection.\n")?;
            return Ok(Flow::Continue);
        };

        let session = EditSession::new(position, records[position - 1].clone());
        let old = session.snapshot().clone();
        let format = self.service.date_format(EntryPoint::MenuEdit);

        writeln!(self.output, "Leave a field blank to keep the current value.")?;

        let date = loop {
            let Some(date) =
                self.prompt(&format!("Enter new date ({}) [{}]: ", format.hint(), old.date))?
            else {
                return Ok(Flow::EndOfInput);
            };
            if date.is_empty() || format.parse(&date).is_ok() {
                break date;
            }
            writeln!(self.output, "Invalid date format. Please use {}.", format.hint())?;
        };

        let Some(category) = self.prompt(&format!("Enter new category [{}]: ", old.category))?
        else {
            return Ok(Flow::EndOfInput);
        };
        let Some(amount) = self.prompt(&format!(
            "Enter new amount ({}) [{}]: ",
            self.currency, old.amount
        ))?
        else {
            return Ok(Flow::EndOfInput);
        };
        let Some(description) =
            self.prompt(&format!("Enter new description [{}]: ", old.description))?
        else {
            return Ok(Flow::EndOfInput);
        };

        let edit = RecordEdit::from_answers(&date, &category, &amount, &description);
        let outcome = self
            .service
            .save_edit(EntryPoint::MenuEdit, &session, &edit)?;
        if outcome.amount_retained() {
            writeln!(self.output, "Invalid amount. Keeping previous value.")?;
        }
        writeln!(self.output, "Expense updated successfully!\n")?;

        Ok(Flow::Continue)
    }

    /// Show the numbered list for a remove/edit, or explain why there is none
    fn listing(&mut self, action: &str) -> LedgerResult<Option<Vec<Record>>> {
        let records = match self.service.list() {
            Ok(records) => records,
            Err(LedgerError::NotFound(_)) => {
                writeln!(self.output, "No expense file found.\n")?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if records.is_empty() {
            writeln!(self.output, "No expenses to {}.\n", action)?;
            return Ok(None);
        }

        writeln!(self.output)?;
        write!(self.output, "{}", format_numbered_list(&records, self.currency))?;
        Ok(Some(records))
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Whether the menu should keep going after an action
enum Flow {
    Continue,
    EndOfInput,
}

/// Parse a 1-based selection, accepting only digits within `1..=count`
fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    answer
        .parse::<usize>()
        .ok()
        .filter(|&position| (1..=count).contains(&position))
}
