use crate::converters::{format_fixed, format_two_decimals};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prefix of the accuracy badge text.
pub const ACCURACY_LABEL: &str = "Akurasi";

/// Error metrics published by `GET /model_evaluation`.
///
/// `MAPE` is a percentage (already multiplied by 100 by the backend).
/// `MAE` and `RMSE` are optional so older payloads that only carry `MAPE`
/// still parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    #[serde(rename = "MAPE")]
    pub mape: Decimal,
    #[serde(rename = "MAE", default)]
    pub mae: Option<Decimal>,
    #[serde(rename = "RMSE", default)]
    pub rmse: Option<Decimal>,
}

impl EvaluationMetrics {
    pub fn new(mape: Decimal) -> Self {
        Self {
            mape,
            mae: None,
            rmse: None,
        }
    }

    /// Displayed accuracy, `100 - MAPE`.
    pub fn accuracy(&self) -> Decimal {
        Decimal::ONE_HUNDRED - self.mape
    }

    /// `"Akurasi: 87.66%"`
    pub fn accuracy_text(&self) -> String {
        format!("{}: {}%", ACCURACY_LABEL, format_two_decimals(self.accuracy()))
    }

    /// Secondary line under the badge, e.g. `"MAE: 1.2345 · RMSE: 2.0000"`.
    /// `None` when the backend sent neither metric.
    pub fn error_summary(&self) -> Option<String> {
        let parts: Vec<String> = [("MAE", self.mae), ("RMSE", self.rmse)]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| format!("{}: {}", name, format_fixed(v, 4))))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}
