use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-3xl mb-6">{"About Energy Forecast"}</h2>

                <div class="prose max-w-none">
                    <p class="text-lg mb-4">
                        {"Monthly energy index forecasts produced by a Prophet model, compared against the measured series."}
                    </p>

                    <h3 class="text-xl font-semibold mb-3">{"What the numbers mean"}</h3>
                    <ul class="list-disc list-inside space-y-2">
                        <li>{"Akurasi is 100 minus the mean absolute percentage error (MAPE) over the months where both actual and forecast values exist."}</li>
                        <li>{"MAE and RMSE are reported in energy index units."}</li>
                        <li>{"The Model 2 column is reserved for a second model and stays empty until one is published."}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
