use crate::converters::{MISSING_VALUE, format_fixed};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Places the backend rounds summary statistics to.
pub const SUMMARY_PLACES: u32 = 4;

/// Min / max / average of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub min: Decimal,
    pub max: Decimal,
    pub average: Decimal,
}

/// Payload of `GET /summary_data`. A side is `None` when its series was empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryData {
    #[serde(default)]
    pub summary_actual: Option<SeriesSummary>,
    #[serde(default)]
    pub summary_forecast: Option<SeriesSummary>,
}

/// Display strings for one stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub min: String,
    pub max: String,
    pub average: String,
}

impl SummaryCard {
    pub fn new(title: &'static str, summary: Option<&SeriesSummary>) -> Self {
        let show = |value: Option<Decimal>| {
            value
                .map(|v| format_fixed(v, SUMMARY_PLACES))
                .unwrap_or_else(|| MISSING_VALUE.to_string())
        };

        Self {
            title,
            min: show(summary.map(|s| s.min)),
            max: show(summary.map(|s| s.max)),
            average: show(summary.map(|s| s.average)),
        }
    }
}

impl SummaryData {
    pub fn cards(&self) -> [SummaryCard; 2] {
        [
            SummaryCard::new("Actual", self.summary_actual.as_ref()),
            SummaryCard::new("Forecast", self.summary_forecast.as_ref()),
        ]
    }
}
