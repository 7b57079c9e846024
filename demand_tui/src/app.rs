//! Application state for the demand dashboard TUI.

use demand_insight::{
    build_report, DashboardError, DashboardReport, DataLoader, StockCodeSelector,
    TransactionTable,
};

/// Panels of the dashboard, mirroring the page sections top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Overview,
    Forecast,
    Errors,
}

impl Panel {
    pub fn all() -> [Panel; 3] {
        [Panel::Overview, Panel::Forecast, Panel::Errors]
    }

    pub fn name(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Forecast => "Forecast",
            Panel::Errors => "Error Distribution",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Panel::Overview => 0,
            Panel::Forecast => 1,
            Panel::Errors => 2,
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Overview => Panel::Forecast,
            Panel::Forecast => Panel::Errors,
            Panel::Errors => Panel::Overview,
        }
    }

    pub fn previous(self) -> Panel {
        match self {
            Panel::Overview => Panel::Errors,
            Panel::Forecast => Panel::Overview,
            Panel::Errors => Panel::Forecast,
        }
    }
}

/// Chart points owned by the app so widgets can borrow them each frame.
/// Rebuilt whenever the report changes.
#[derive(Debug, Default)]
pub struct ChartData {
    pub actual: Vec<(f64, f64)>,
    pub predicted: Vec<(f64, f64)>,
    pub train_bars: Vec<(f64, f64)>,
    pub train_density: Vec<(f64, f64)>,
    pub test_bars: Vec<(f64, f64)>,
    pub test_density: Vec<(f64, f64)>,
}

impl ChartData {
    fn from_report(report: &DashboardReport) -> Self {
        Self {
            actual: report.forecast.actual.points(),
            predicted: report.forecast.predicted.points(),
            train_bars: report.train_distribution.histogram.bar_points(),
            train_density: report.train_distribution.density.clone(),
            test_bars: report.test_distribution.histogram.bar_points(),
            test_density: report.test_distribution.density.clone(),
        }
    }
}

/// Main application state.
pub struct App {
    /// The loaded table; kept so selection changes can re-run the pipeline
    pub table: TransactionTable,
    /// Distinct stock codes offered in the sidebar
    pub choices: Vec<String>,
    /// Index of the active sidebar choice
    pub selected: usize,
    /// Currently displayed panel
    pub panel: Panel,
    /// Result of the latest pipeline run; gate failures render as errors
    pub report: Result<DashboardReport, DashboardError>,
    /// Owned chart points for the latest report
    pub chart_data: ChartData,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Load the CSV and run the pipeline for the default selection.
    /// Fails only when the file itself cannot be read; data-quality
    /// problems are kept in `report` and rendered by the UI.
    pub fn load(path: &str) -> demand_insight::Result<Self> {
        let table = DataLoader::from_csv(path)?;
        let choices = match StockCodeSelector::from_table(&table) {
            Ok(selector) => selector.choices().to_vec(),
            // The gate will report the underlying problem
            Err(_) => Vec::new(),
        };

        let report = build_report(&table, choices.first().map(String::as_str));
        let chart_data = report
            .as_ref()
            .map(ChartData::from_report)
            .unwrap_or_default();

        Ok(App {
            table,
            choices,
            selected: 0,
            panel: Panel::default(),
            report,
            chart_data,
            should_quit: false,
        })
    }

    /// Re-run the full pipeline for the current selection. Nothing is
    /// cached across selections; each report is computed from scratch.
    pub fn refresh(&mut self) {
        let selection = self.choices.get(self.selected).map(String::as_str);
        self.report = build_report(&self.table, selection);
        self.chart_data = self
            .report
            .as_ref()
            .map(ChartData::from_report)
            .unwrap_or_default();
    }

    /// The stock code currently highlighted in the sidebar
    pub fn selected_code(&self) -> Option<&str> {
        self.choices.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.choices.len();
        self.refresh();
    }

    pub fn select_previous(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.selected = (self.selected + self.choices.len() - 1) % self.choices.len();
        self.refresh();
    }

    pub fn next_panel(&mut self) {
        self.panel = self.panel.next();
    }

    pub fn previous_panel(&mut self) {
        self.panel = self.panel.previous();
    }
}
