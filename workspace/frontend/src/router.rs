use common::ChartSeries;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::forecast::Forecast;
use crate::components::layout::layout::Layout;
use crate::pages::about::About;
use crate::pages::data::DataPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/forecast")]
    Forecast,
    #[at("/data")]
    Data,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route, chart_series: Option<ChartSeries>) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Redirecting home to forecast");
            html! { <Redirect<Route> to={Route::Forecast} /> }
        }
        Route::Forecast => {
            log::trace!("Rendering Forecast page");
            html! { <Layout title="Forecast"><Forecast chart_series={chart_series} /></Layout> }
        }
        Route::Data => {
            log::trace!("Rendering Data page");
            html! { <Layout title="Data"><DataPage /></Layout> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! { <Layout title="About"><About /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}
