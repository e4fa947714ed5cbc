use yew::prelude::*;
use crate::components::data::ActualTable;

#[function_component(DataPage)]
pub fn data_page() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Actual Energy Index"}</h3>
                <p class="text-sm text-gray-500 mb-4">{"Monthly values measured over the last two years"}</p>
                <ActualTable />
            </div>
        </div>
    }
}
