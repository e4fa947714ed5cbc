use common::ChartSeries;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod chart_data;
pub mod hooks;
pub mod router;
pub mod settings;

use router::{switch, Route};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Chart series read from the host page at start-up.
    pub chart_series: Option<ChartSeries>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let render = {
        let chart_series = props.chart_series.clone();
        Callback::from(move |route: Route| switch(route, chart_series.clone()))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn start() {
    let settings = settings::get_settings();

    let chart_series = match chart_data::load_chart_series(&settings.chart_data_id) {
        Ok(series) => {
            log::debug!("Loaded chart series with {} labels", series.labels.len());
            Some(series)
        }
        Err(err) => {
            log::warn!("Forecast chart disabled: {}", err);
            None
        }
    };

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps { chart_series }).render();
    log::info!("Application initialized successfully");
}

/// Runs `start` once the document content has been parsed.
fn when_content_loaded(start: fn()) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available, dashboard not started");
        return;
    };

    if document.ready_state() != "loading" {
        start();
        return;
    }

    log::debug!("Waiting for DOMContentLoaded");
    let listener = Closure::once(start);
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref())
    {
        log::error!("Failed to register DOMContentLoaded listener: {:?}", err);
        return;
    }
    listener.forget();
}

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Energy Forecast Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {:?}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    when_content_loaded(start);
}
