//! What each dashboard widget shows, and how a fetch result changes it.
//!
//! Every widget follows the same rule: a successful response replaces the
//! view wholesale, a failed one is logged and changes nothing.

use crate::actual::{ActualPoint, ActualRow};
use crate::error::FetchError;
use crate::evaluation::{ACCURACY_LABEL, EvaluationMetrics};
use crate::forecast::{ForecastPoint, ForecastRow, forecast_rows};
use crate::summary::{SummaryCard, SummaryData};
use tracing::{error, info};

/// A widget fed by one backend endpoint.
pub trait FetchView: Default + Clone {
    type Payload;

    /// Endpoint label used in diagnostics.
    const SOURCE: &'static str;

    /// Replaces the current content with a fresh payload.
    fn replace(&mut self, payload: Self::Payload);

    /// Applies one fetch outcome. Returns `true` when the view changed.
    fn apply(&mut self, result: Result<Self::Payload, FetchError>) -> bool {
        match result {
            Ok(payload) => {
                self.replace(payload);
                info!(endpoint = Self::SOURCE, "View updated");
                true
            }
            Err(err) => {
                error!(endpoint = Self::SOURCE, %err, "Fetch failed, keeping previous view");
                false
            }
        }
    }
}

/// Accuracy badge. Shows a placeholder until the first successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyView {
    text: String,
    detail: Option<String>,
}

impl Default for AccuracyView {
    fn default() -> Self {
        Self {
            text: format!("{}: -", ACCURACY_LABEL),
            detail: None,
        }
    }
}

impl AccuracyView {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl FetchView for AccuracyView {
    type Payload = EvaluationMetrics;
    const SOURCE: &'static str = "/model_evaluation";

    fn replace(&mut self, metrics: EvaluationMetrics) {
        self.text = metrics.accuracy_text();
        self.detail = metrics.error_summary();
    }
}

/// Body of the forecast table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastTableView {
    rows: Vec<ForecastRow>,
}

impl ForecastTableView {
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }
}

impl FetchView for ForecastTableView {
    type Payload = Vec<ForecastPoint>;
    const SOURCE: &'static str = "/forecast_data";

    fn replace(&mut self, points: Vec<ForecastPoint>) {
        self.rows = forecast_rows(&points);
    }
}

/// Summary stat cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    cards: [SummaryCard; 2],
}

impl Default for SummaryView {
    fn default() -> Self {
        Self {
            cards: SummaryData::default().cards(),
        }
    }
}

impl SummaryView {
    pub fn cards(&self) -> &[SummaryCard] {
        &self.cards
    }
}

impl FetchView for SummaryView {
    type Payload = SummaryData;
    const SOURCE: &'static str = "/summary_data";

    fn replace(&mut self, data: SummaryData) {
        self.cards = data.cards();
    }
}

/// Body of the actual data table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActualTableView {
    rows: Vec<ActualRow>,
}

impl ActualTableView {
    pub fn rows(&self) -> &[ActualRow] {
        &self.rows
    }
}

impl FetchView for ActualTableView {
    type Payload = Vec<ActualPoint>;
    const SOURCE: &'static str = "/actual_data";

    fn replace(&mut self, points: Vec<ActualPoint>) {
        self.rows = points.iter().map(ActualRow::from_point).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn point(year: i32, month: u32, yhat: i64, scale: u32) -> ForecastPoint {
        ForecastPoint::new(
            NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            Decimal::new(yhat, scale),
        )
    }

    fn network_error() -> FetchError {
        FetchError::Transport("NetworkError when attempting to fetch resource.".to_string())
    }

    #[test]
    fn test_accuracy_placeholder_before_first_fetch() {
        let view = AccuracyView::default();
        assert_eq!(view.text(), "Akurasi: -");
        assert_eq!(view.detail(), None);
    }

    #[test]
    fn test_accuracy_success_updates_text() {
        let mut view = AccuracyView::default();
        let changed = view.apply(Ok(EvaluationMetrics::new(Decimal::new(12345, 3))));

        assert!(changed);
        assert_eq!(view.text(), "Akurasi: 87.66%");
    }

    #[test]
    fn test_accuracy_failure_leaves_text_unchanged() {
        let mut view = AccuracyView::default();
        view.apply(Ok(EvaluationMetrics::new(Decimal::new(5, 0))));
        let before = view.clone();

        assert!(!view.apply(Err(network_error())));
        assert_eq!(view, before);
        assert_eq!(view.text(), "Akurasi: 95.00%");

        let parse_error = FetchError::Parse("missing field `MAPE`".to_string());
        assert!(!view.apply(Err(parse_error)));
        assert_eq!(view, before);
    }

    #[test]
    fn test_table_renders_one_row_per_point() {
        let mut view = ForecastTableView::default();
        view.apply(Ok(vec![point(2024, 3, 421, 1), point(2024, 4, 5, 0), point(2024, 5, 123456, 4)]));

        let cells: Vec<[String; 3]> = view.rows().iter().map(ForecastRow::cells).collect();
        assert_eq!(
            cells,
            vec![
                ["03-2024", "42.10", "-"].map(String::from),
                ["04-2024", "5.00", "-"].map(String::from),
                ["05-2024", "12.35", "-"].map(String::from),
            ]
        );
    }

    #[test]
    fn test_table_cleared_by_empty_series() {
        let mut view = ForecastTableView::default();
        view.apply(Ok(vec![point(2024, 3, 1, 0), point(2024, 4, 2, 0)]));
        assert_eq!(view.rows().len(), 2);

        assert!(view.apply(Ok(Vec::new())));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_table_failure_keeps_previous_rows() {
        let mut view = ForecastTableView::default();
        view.apply(Ok(vec![point(2024, 3, 1, 0)]));

        let status = FetchError::Status {
            status: 500,
            message: "Gagal mengambil data actual atau forecast".to_string(),
        };
        assert!(!view.apply(Err(status)));
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].period, "03-2024");
    }

    #[test]
    fn test_summary_view_defaults_to_placeholders() {
        let view = SummaryView::default();
        assert_eq!(view.cards().len(), 2);
        assert!(view.cards().iter().all(|card| card.average == "-"));
    }

    #[test]
    fn test_actual_table_failure_keeps_rows() {
        let mut view = ActualTableView::default();
        view.apply(Ok(vec![ActualPoint {
            ds: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
            y: Decimal::new(7, 1),
        }]));

        assert!(!view.apply(Err(network_error())));
        assert_eq!(view.rows()[0].value, "0.70");
    }
}
