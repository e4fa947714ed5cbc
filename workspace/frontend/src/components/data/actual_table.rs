use common::ActualTableView;
use yew::prelude::*;
use crate::api_client::actual::get_actual_data;
use crate::hooks::use_fetch_view;

#[function_component(ActualTable)]
pub fn actual_table() -> Html {
    let view = use_fetch_view::<ActualTableView, _, _>(get_actual_data);

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Energy Index"}</th>
                    </tr>
                </thead>
                <tbody id="actual-table">
                    { for view.rows().iter().map(|row| html! {
                        <tr>
                            <td>{ &row.period }</td>
                            <td>{ &row.value }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
