use common::{ChartSeries, ViewError};
use web_sys::window;

/// Reads the chart series the host page embeds as
/// `<script type="application/json" id="...">`.
pub fn load_chart_series(element_id: &str) -> Result<ChartSeries, ViewError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| ViewError::MissingTarget("document".to_string()))?;

    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| ViewError::MissingTarget(element_id.to_string()))?;

    let raw = element.text_content().unwrap_or_default();
    log::trace!("Chart data element #{} holds {} bytes", element_id, raw.len());

    ChartSeries::from_json(&raw)
}
