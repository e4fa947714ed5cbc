//! Forecast comparison chart.
//!
//! The figure is built once from an explicit [`ChartSeries`] and never
//! touched by fetch results afterwards.

use crate::error::{ChartError, ViewError};
use plotly::common::{Font, Line, LineShape, Mode, Orientation, Title};
use plotly::layout::{Axis, AxisType, HoverMode, Legend};
use plotly::{Layout, Scatter};
use serde::{Deserialize, Serialize};

pub const CHART_TITLE: &str = "Forecast Comparison";
pub const MODEL_1_NAME: &str = "Model 1";
pub const MODEL_2_NAME: &str = "Model 2";
pub const MODEL_1_COLOR: &str = "#ff4d4d";
pub const MODEL_2_COLOR: &str = "#4d79ff";
/// Foreground for every label on the dark background.
pub const TEXT_COLOR: &str = "#f4f4f4";
const TRANSPARENT: &str = "rgba(0,0,0,0)";
const TITLE_SIZE: usize = 20;
const TICK_ANGLE: f64 = -45.0;

type SeriesTrace = Scatter<String, Option<f64>>;

/// Category labels and the two model series plotted against them.
///
/// Values are bound to labels by index; `null` entries leave a gap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub model_1: Vec<Option<f64>>,
    pub model_2: Vec<Option<f64>>,
}

impl ChartSeries {
    /// Reads the JSON document the host page embeds for the chart.
    pub fn from_json(raw: &str) -> Result<Self, ViewError> {
        let series: ChartSeries =
            serde_json::from_str(raw).map_err(|e| ViewError::InvalidConfig(e.to_string()))?;
        series.validate()?;
        Ok(series)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let labels = self.labels.len();
        if self.model_1.len() != labels || self.model_2.len() != labels {
            return Err(ChartError::LengthMismatch {
                labels,
                model_1: self.model_1.len(),
                model_2: self.model_2.len(),
            });
        }
        Ok(())
    }
}

/// Traces and layout ready to be handed to Plotly.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonFigure {
    pub data: Vec<Box<SeriesTrace>>,
    pub layout: Layout,
}

fn series_trace(
    labels: &[String],
    values: &[Option<f64>],
    name: &str,
    color: &str,
) -> Box<SeriesTrace> {
    Scatter::new(labels.to_vec(), values.to_vec())
        .name(name)
        .mode(Mode::Lines)
        .line(Line::new().color(color.to_string()).shape(LineShape::Spline))
}

fn dark_font() -> Font {
    Font::new().color(TEXT_COLOR)
}

fn comparison_layout() -> Layout {
    Layout::new()
        .title(Title::with_text(CHART_TITLE).font(dark_font().size(TITLE_SIZE)))
        .hover_mode(HoverMode::X)
        .legend(Legend::new().font(dark_font()).orientation(Orientation::Horizontal))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .tick_angle(TICK_ANGLE)
                .tick_font(dark_font()),
        )
        .y_axis(Axis::new().type_(AxisType::Linear).tick_font(dark_font()))
        .paper_background_color(TRANSPARENT)
        .plot_background_color(TRANSPARENT)
}

/// Builds the two-series comparison figure.
pub fn comparison_figure(series: &ChartSeries) -> Result<ComparisonFigure, ChartError> {
    series.validate()?;

    tracing::debug!(
        points = series.labels.len(),
        "Building forecast comparison figure"
    );

    Ok(ComparisonFigure {
        data: vec![
            series_trace(&series.labels, &series.model_1, MODEL_1_NAME, MODEL_1_COLOR),
            series_trace(&series.labels, &series.model_2, MODEL_2_NAME, MODEL_2_COLOR),
        ],
        layout: comparison_layout(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample() -> ChartSeries {
        ChartSeries {
            labels: vec!["01-2024".into(), "02-2024".into(), "03-2024".into()],
            model_1: vec![Some(1.5), Some(2.0), Some(2.5)],
            model_2: vec![Some(1.0), None, Some(3.0)],
        }
    }

    #[test]
    fn test_figure_has_two_named_series() {
        let figure = comparison_figure(&sample()).unwrap();
        let data: Value = serde_json::to_value(&figure.data).unwrap();
        let traces = data.as_array().unwrap();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "Model 1");
        assert_eq!(traces[1]["name"], "Model 2");
        assert_eq!(traces[0]["type"], "scatter");
    }

    #[test]
    fn test_series_bound_to_supplied_arrays() {
        let figure = comparison_figure(&sample()).unwrap();
        let data: Value = serde_json::to_value(&figure.data).unwrap();

        assert_eq!(data[0]["x"], json!(["01-2024", "02-2024", "03-2024"]));
        assert_eq!(data[0]["y"], json!([1.5, 2.0, 2.5]));
        assert_eq!(data[1]["x"], data[0]["x"]);
        assert_eq!(data[1]["y"], json!([1.0, null, 3.0]));
    }

    #[test]
    fn test_series_colors_and_smoothing() {
        let figure = comparison_figure(&sample()).unwrap();
        let data: Value = serde_json::to_value(&figure.data).unwrap();

        assert_eq!(data[0]["line"]["color"], MODEL_1_COLOR);
        assert_eq!(data[1]["line"]["color"], MODEL_2_COLOR);
        assert_eq!(data[0]["line"]["shape"], "spline");
        assert_eq!(data[0]["mode"], "lines");
    }

    #[test]
    fn test_layout_title_and_axes() {
        let figure = comparison_figure(&sample()).unwrap();
        let layout: Value = serde_json::to_value(&figure.layout).unwrap();

        assert_eq!(layout["title"]["text"], CHART_TITLE);
        assert_eq!(layout["title"]["font"]["color"], TEXT_COLOR);
        assert_eq!(layout["xaxis"]["type"], "category");
        assert_eq!(layout["xaxis"]["tickangle"], TICK_ANGLE);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let mut series = sample();
        series.model_2.pop();

        assert_eq!(
            comparison_figure(&series).unwrap_err(),
            ChartError::LengthMismatch {
                labels: 3,
                model_1: 3,
                model_2: 2
            }
        );
    }

    #[test]
    fn test_empty_series_is_valid() {
        let figure = comparison_figure(&ChartSeries::default()).unwrap();
        assert_eq!(figure.data.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let series = ChartSeries::from_json(
            r#"{"labels": ["01-2024", "02-2024"], "model_1": [1, 2], "model_2": [null, 4.5]}"#,
        )
        .unwrap();
        assert_eq!(series.model_1, vec![Some(1.0), Some(2.0)]);
        assert_eq!(series.model_2, vec![None, Some(4.5)]);

        let err = ChartSeries::from_json(r#"{"labels": ["a"], "model_1": [], "model_2": [1]}"#)
            .unwrap_err();
        assert!(matches!(err, ViewError::Chart(ChartError::LengthMismatch { .. })));

        let err = ChartSeries::from_json("labels = [1, 2]").unwrap_err();
        assert!(matches!(err, ViewError::InvalidConfig(_)));
    }
}
