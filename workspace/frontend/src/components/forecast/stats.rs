use common::{SummaryCard, SummaryView};
use yew::prelude::*;
use crate::api_client::summary::get_summary_data;
use crate::hooks::use_fetch_view;

fn summary_card(card: &SummaryCard) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{ card.title }</div>
                <div class="stat-value text-lg">{ &card.average }</div>
                <div class="stat-desc">{ format!("Min {} · Max {}", card.min, card.max) }</div>
            </div>
        </div>
    }
}

#[function_component(ForecastStats)]
pub fn forecast_stats() -> Html {
    let view = use_fetch_view::<SummaryView, _, _>(get_summary_data);

    html! {
        <>
            { for view.cards().iter().map(summary_card) }
        </>
    }
}
