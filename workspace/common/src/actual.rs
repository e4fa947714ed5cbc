use crate::converters::{deserialize_period_date, format_month_year, format_two_decimals};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observed period from `GET /actual_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualPoint {
    #[serde(deserialize_with = "deserialize_period_date")]
    pub ds: NaiveDate,
    pub y: Decimal,
}

/// A rendered row of the actual data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualRow {
    pub period: String,
    pub value: String,
}

impl ActualRow {
    pub fn from_point(point: &ActualPoint) -> Self {
        Self {
            period: format_month_year(point.ds),
            value: format_two_decimals(point.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_row_formatting() {
        let points: Vec<ActualPoint> = serde_json::from_str(
            r#"[
                {"ds": "Mon, 01 Jan 2024 00:00:00 GMT", "y": 0.8731},
                {"ds": "2024-02-01", "y": 1}
            ]"#,
        )
        .unwrap();

        let rows: Vec<ActualRow> = points.iter().map(ActualRow::from_point).collect();
        assert_eq!(
            rows,
            vec![
                ActualRow {
                    period: "01-2024".to_string(),
                    value: "0.87".to_string()
                },
                ActualRow {
                    period: "02-2024".to_string(),
                    value: "1.00".to_string()
                },
            ]
        );
    }
}
