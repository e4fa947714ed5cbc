use common::ChartSeries;
use yew::prelude::*;
use super::accuracy::AccuracyDisplay;
use super::chart::ForecastChart;
use super::stats::ForecastStats;
use super::table::ForecastTable;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart_series: Option<ChartSeries>,
}

/// Forecast page. The accuracy badge, summary cards and table each load
/// on their own; the chart only depends on the series passed in.
#[function_component(Forecast)]
pub fn forecast(props: &Props) -> Html {
    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                <AccuracyDisplay />
                <ForecastStats />
            </div>
            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body">
                    <ForecastChart series={props.chart_series.clone()} />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Forecast Table"}</h3>
                    <ForecastTable />
                </div>
            </div>
        </>
    }
}
