use common::ForecastTableView;
use yew::prelude::*;
use crate::api_client::forecast::get_forecast_data;
use crate::hooks::use_fetch_view;

pub const FORECAST_TABLE_ID: &str = "forecast-table";

#[function_component(ForecastTable)]
pub fn forecast_table() -> Html {
    let view = use_fetch_view::<ForecastTableView, _, _>(get_forecast_data);

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Model 1"}</th>
                        <th>{"Model 2"}</th>
                    </tr>
                </thead>
                <tbody id={FORECAST_TABLE_ID}>
                    { for view.rows().iter().map(|row| {
                        let [period, model_1, model_2] = row.cells();
                        html! {
                            <tr>
                                <td>{ period }</td>
                                <td>{ model_1 }</td>
                                <td>{ model_2 }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
