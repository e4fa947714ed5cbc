use common::AccuracyView;
use yew::prelude::*;
use crate::api_client::evaluation::get_model_evaluation;
use crate::hooks::use_fetch_view;

pub const ACCURACY_ELEMENT_ID: &str = "model-accuracy";

#[function_component(AccuracyDisplay)]
pub fn accuracy_display() -> Html {
    let view = use_fetch_view::<AccuracyView, _, _>(get_model_evaluation);

    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{"Model Accuracy"}</div>
                <div class="stat-value text-primary" id={ACCURACY_ELEMENT_ID}>{ view.text() }</div>
                {if let Some(detail) = view.detail() {
                    html! { <div class="stat-desc">{ detail }</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
