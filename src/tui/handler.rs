//! Event handler for the TUI
//!
//! Routes key events to the open dialog, the form or the table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => {}
        Event::Tick => app.notifications.remove_expired(),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    if key.code == KeyCode::F(2) {
        app.show_summary();
        return;
    }

    match app.focus {
        Focus::Form => handle_form_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match &app.dialog {
        ActiveDialog::ConfirmRemove { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_remove(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Summary(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => {
            if app.is_editing() {
                app.cancel_edit();
            } else {
                app.set_focus(Focus::Table);
            }
        }
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        KeyCode::Left => app.form.focused_input_mut().move_left(),
        KeyCode::Right => app.form.focused_input_mut().move_right(),
        KeyCode::Home => app.form.focused_input_mut().move_start(),
        KeyCode::End => app.form.focused_input_mut().move_end(),
        KeyCode::Backspace => app.form.focused_input_mut().backspace(),
        KeyCode::Delete => app.form.focused_input_mut().delete(),
        KeyCode::Char(c) => app.form.focused_input_mut().insert(c),
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_remove(),
        KeyCode::Char('s') => app.show_summary(),
        KeyCode::Char('a') | KeyCode::Tab | KeyCode::BackTab => app.set_focus(Focus::Form),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EntryPoint, Settings};
    use crate::services::{ExpenseInput, ExpenseService};
    use crate::storage::ExpenseStore;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submitting() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        let mut app = App::new(&service, "TL");

        type_text(&mut app, "15-01-2025");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Food");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "10");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].category, "Food");
    }

    #[test]
    fn test_table_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        for category in ["Food", "Bus"] {
            service
                .add(
                    EntryPoint::FormAdd,
                    &ExpenseInput::new("15-01-2025", category, "1", ""),
                )
                .unwrap();
        }
        let mut app = App::new(&service, "TL");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Table);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.records.len(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].category, "Food");

        press(&mut app, KeyCode::Char('e'));
        assert!(app.is_editing());
        assert_eq!(app.focus, Focus::Form);

        press(&mut app, KeyCode::Esc);
        assert!(!app.is_editing());
        assert_eq!(app.form.category.value(), "");
    }

    #[test]
    fn test_quit_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        let mut app = App::new(&service, "TL");

        // 'q' is text while the form has focus
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.form.date.value(), "q");

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }
}
