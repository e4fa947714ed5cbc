use common::{ChartSeries, ViewError, comparison_figure};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

pub const CHART_CONTAINER_ID: &str = "forecastPlot";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Series to plot. `None` when the page supplied no chart data.
    pub series: Option<ChartSeries>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ViewError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| ViewError::Render(e.to_string()))
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err))
}

fn render_chart(container: &NodeRef, series: &ChartSeries) -> Result<(), ViewError> {
    let element = container
        .cast::<Element>()
        .ok_or_else(|| ViewError::MissingTarget(CHART_CONTAINER_ID.to_string()))?;

    let figure = comparison_figure(series)?;
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    newPlot(
        &element.id(),
        to_js(&figure.data)?,
        to_js(&figure.layout)?,
        to_js(&config)?,
    )
    .map_err(|e| ViewError::Render(js_error_message(&e)))?;

    Ok(())
}

/// Static comparison chart, drawn once per mount from the supplied series.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let initialized = use_mut_ref(|| false);

    {
        let series = props.series.clone();
        use_effect_with(container_ref.clone(), move |container_ref| {
            if !*initialized.borrow() {
                match series {
                    Some(series) => match render_chart(container_ref, &series) {
                        Ok(()) => {
                            *initialized.borrow_mut() = true;
                            log::info!("Forecast chart rendered with {} labels", series.labels.len());
                        }
                        Err(err) => log::error!("Forecast chart not rendered: {}", err),
                    },
                    None => log::warn!("No chart series supplied, #{} left empty", CHART_CONTAINER_ID),
                }
            }
            || ()
        });
    }

    html! {
        <div ref={container_ref} id={CHART_CONTAINER_ID} class="chart-container" style="width:100%; height:400px;"></div>
    }
}
