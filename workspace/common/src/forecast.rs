use crate::converters::{
    MISSING_VALUE, deserialize_period_date, format_month_year, format_two_decimals,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Second-model column value.
///
/// The table reserves a column for a second model whose forecast the
/// backend does not publish yet; until it does, every row shows this.
pub const MODEL_2_PLACEHOLDER: &str = MISSING_VALUE;

/// One forecasted period from `GET /forecast_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(deserialize_with = "deserialize_period_date")]
    pub ds: NaiveDate,
    pub yhat: Decimal,
}

impl ForecastPoint {
    pub fn new(ds: NaiveDate, yhat: Decimal) -> Self {
        Self { ds, yhat }
    }
}

/// A rendered forecast table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub period: String,
    pub model_1: String,
    pub model_2: String,
}

impl ForecastRow {
    pub fn from_point(point: &ForecastPoint) -> Self {
        Self {
            period: format_month_year(point.ds),
            model_1: format_two_decimals(point.yhat),
            model_2: MODEL_2_PLACEHOLDER.to_string(),
        }
    }

    /// Cells in column order: period, model 1, model 2.
    pub fn cells(&self) -> [String; 3] {
        [
            self.period.clone(),
            self.model_1.clone(),
            self.model_2.clone(),
        ]
    }
}

/// Converts a backend series into rows, preserving backend order.
pub fn forecast_rows(points: &[ForecastPoint]) -> Vec<ForecastRow> {
    points.iter().map(ForecastRow::from_point).collect()
}
