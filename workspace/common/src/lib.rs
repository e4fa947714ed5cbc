//! Toolkit-independent core of the energy forecast dashboard.
//!
//! Transport types mirror the backend's JSON payloads; the converters and
//! view models turn them into the exact strings the frontend renders, so
//! everything observable about the dashboard can be tested without a
//! browser.

pub mod actual;
pub mod chart;
pub mod converters;
pub mod error;
pub mod evaluation;
pub mod forecast;
pub mod summary;
pub mod view_model;

pub use actual::{ActualPoint, ActualRow};
pub use chart::{ChartSeries, ComparisonFigure, comparison_figure};
pub use error::{ChartError, ConvertError, FetchError, FetchResult, ViewError};
pub use evaluation::EvaluationMetrics;
pub use forecast::{ForecastPoint, ForecastRow, MODEL_2_PLACEHOLDER};
pub use summary::{SeriesSummary, SummaryCard, SummaryData};
pub use view_model::{AccuracyView, ActualTableView, FetchView, ForecastTableView, SummaryView};

use serde::{Deserialize, Serialize};

/// Body the backend sends with 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
