//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;
use crate::models::ChartType;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        // Editing only happens inside a dialog
        InputMode::Editing => {
            app.input_mode = InputMode::Normal;
            Ok(())
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Chart type
        KeyCode::Char('b') => app.set_chart_type(ChartType::Bar),
        KeyCode::Char('l') => app.set_chart_type(ChartType::Line),
        KeyCode::Char('p') => app.set_chart_type(ChartType::Pie),

        // Threshold
        KeyCode::Char('f') | KeyCode::Char('t') => app.open_dialog(ActiveDialog::Threshold),
        KeyCode::Char('r') => app.reset_threshold(),

        // Year selection
        KeyCode::Left | KeyCode::Char('[') => app.cycle_year(-1),
        KeyCode::Right | KeyCode::Char(']') => app.cycle_year(1),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_year_index(index);
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes help
            app.close_dialog();
        }
        ActiveDialog::Threshold => handle_threshold_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in the threshold dialog
fn handle_threshold_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.apply_threshold_input(),
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Backspace => app.threshold_input.backspace(),
        KeyCode::Delete => app.threshold_input.delete(),
        KeyCode::Left => app.threshold_input.move_left(),
        KeyCode::Right => app.threshold_input.move_right(),
        KeyCode::Home => app.threshold_input.move_start(),
        KeyCode::End => app.threshold_input.move_end(),
        KeyCode::Char(c) => app.threshold_input.insert(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::sales::tests::flat_year;
    use crate::models::SalesCollection;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn collection() -> SalesCollection {
        SalesCollection::new(vec![
            flat_year(2024, 300),
            flat_year(2023, 200),
            flat_year(2022, 100),
        ])
        .unwrap()
    }

    #[test]
    fn test_chart_keys() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.dashboard.chart_type(), ChartType::Pie);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.dashboard.chart_type(), ChartType::Line);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.dashboard.chart_type(), ChartType::Bar);
    }

    #[test]
    fn test_chart_switch_keeps_year_and_threshold() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Backspace);
        for c in "150".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('b'));

        assert_eq!(app.dashboard.selected_year(), 2023);
        assert_eq!(app.dashboard.threshold(), 150.0);
    }

    #[test]
    fn test_threshold_dialog_escape_discards() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.active_dialog, ActiveDialog::Threshold);
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.dashboard.threshold(), 0.0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_dialog_swallows_chart_keys() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.dashboard.chart_type(), ChartType::Bar);
        assert_eq!(app.threshold_input.value(), "0p");
    }

    #[test]
    fn test_year_keys() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.dashboard.selected_year(), 2022);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.dashboard.selected_year(), 2024);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.dashboard.selected_year(), 2022);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.dashboard.selected_year(), 2024);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.dashboard.selected_year(), 2022);
    }

    #[test]
    fn test_letter_keys_do_not_move_year() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.dashboard.selected_year(), 2024);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.dashboard.selected_year(), 2024);
        assert_eq!(app.dashboard.chart_type(), ChartType::Line);
    }

    #[test]
    fn test_help_and_quit() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        press(&mut app, KeyCode::Char('f'));
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
