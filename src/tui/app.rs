//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Dashboard state (selected year, chart type, threshold) lives in the
//! wrapped [`Dashboard`]; everything else here is input plumbing.

use crate::config::settings::Settings;
use crate::display::format_threshold;
use crate::models::{ChartType, SalesCollection};
use crate::reports::Dashboard;
use crate::services::parse_threshold;

use super::widgets::TextInput;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Threshold,
}

/// Main application state
pub struct App<'a> {
    /// Dashboard view state over the generated data
    pub dashboard: Dashboard<'a>,

    /// Application settings
    pub settings: &'a Settings,

    /// Seed that produced the data, shown in the status bar
    pub seed: Option<u64>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Threshold entry field
    pub threshold_input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(collection: &'a SalesCollection, settings: &'a Settings, seed: Option<u64>) -> Self {
        Self {
            dashboard: Dashboard::with_chart_state(collection, settings.initial_chart_state()),
            settings,
            seed,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            threshold_input: TextInput::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::Threshold {
            let current = self.dashboard.threshold();
            let text = if current.is_nan() {
                String::new()
            } else {
                format_threshold(current)
            };
            self.threshold_input = TextInput::new()
                .label("Sales threshold")
                .placeholder("0")
                .content(text)
                .focused(true);
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Switch the chart rendering
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.dashboard.set_chart_type(chart_type);
        self.set_status(format!("{} chart", chart_type));
    }

    /// Apply the threshold dialog's text and close it
    pub fn apply_threshold_input(&mut self) {
        let threshold = parse_threshold(self.threshold_input.value());
        self.dashboard.set_threshold(threshold);
        log::debug!("threshold set to {}", threshold);

        let shown = self.dashboard.chart().month_count();
        self.set_status(format!(
            "Threshold {} ({} months shown)",
            format_threshold(threshold),
            shown
        ));
        self.close_dialog();
    }

    /// Clear the sales threshold
    pub fn reset_threshold(&mut self) {
        self.dashboard.set_threshold(0.0);
        self.set_status("Threshold cleared");
    }

    /// Move the year selection within the collection
    pub fn cycle_year(&mut self, offset: isize) {
        self.dashboard.cycle_year(offset);
        self.clear_status();
    }

    /// Select the year at `index` in collection order, if it exists
    pub fn select_year_index(&mut self, index: usize) {
        let year = self
            .dashboard
            .collection()
            .years()
            .get(index)
            .map(|y| y.year());
        match year {
            Some(year) => {
                self.dashboard.select_year(year);
                self.clear_status();
            }
            None => self.set_status(format!("No year #{}", index + 1)),
        }
    }

    /// Index of the displayed year in collection order
    pub fn selected_year_index(&self) -> usize {
        self.dashboard
            .collection()
            .position(self.dashboard.current_year_data().year())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sales::tests::flat_year;

    fn collection() -> SalesCollection {
        SalesCollection::new(vec![
            flat_year(2024, 300),
            flat_year(2023, 200),
            flat_year(2022, 100),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_uses_settings_chart_state() {
        let collection = collection();
        let mut settings = Settings::default();
        settings.default_chart_type = ChartType::Line;
        settings.default_threshold = 250.0;

        let app = App::new(&collection, &settings, Some(1));
        assert_eq!(app.dashboard.chart_type(), ChartType::Line);
        assert_eq!(app.dashboard.threshold(), 250.0);
        assert_eq!(app.dashboard.selected_year(), 2024);
    }

    #[test]
    fn test_threshold_dialog_round_trip() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        app.open_dialog(ActiveDialog::Threshold);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.threshold_input.value(), "0");

        app.threshold_input.clear();
        for c in "250".chars() {
            app.threshold_input.insert(c);
        }
        app.apply_threshold_input();

        assert!(!app.has_dialog());
        assert_eq!(app.dashboard.threshold(), 250.0);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Threshold 250 (12 months shown)")
        );
    }

    #[test]
    fn test_non_numeric_threshold_hides_all_months() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        app.open_dialog(ActiveDialog::Threshold);
        app.threshold_input.clear();
        app.threshold_input.insert('x');
        app.apply_threshold_input();

        assert!(app.dashboard.threshold().is_nan());
        assert_eq!(app.dashboard.chart().month_count(), 0);

        app.reset_threshold();
        assert_eq!(app.dashboard.chart().month_count(), 12);
    }

    #[test]
    fn test_select_year_index() {
        let collection = collection();
        let settings = Settings::default();
        let mut app = App::new(&collection, &settings, None);

        app.select_year_index(2);
        assert_eq!(app.dashboard.selected_year(), 2022);
        assert_eq!(app.selected_year_index(), 2);

        app.select_year_index(7);
        assert_eq!(app.dashboard.selected_year(), 2022);
        assert_eq!(app.status_message.as_deref(), Some("No year #8"));
    }
}
