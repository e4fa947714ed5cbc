use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm sticky top-0 z-40">
            <div class="navbar-start">
                <Link<Route> to={Route::Forecast} classes="btn btn-ghost text-xl">
                    <i class="fas fa-bolt"></i>{" Energy Forecast"}
                </Link<Route>>
            </div>
            <div class="navbar-end">
                <ul class="menu menu-horizontal px-1">
                    <li><Link<Route> to={Route::Forecast} classes="nav-link"><i class="fas fa-chart-line w-5"></i>{" Forecast"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Data} classes="nav-link"><i class="fas fa-table w-5"></i>{" Data"}</Link<Route>></li>
                    <li><Link<Route> to={Route::About} classes="nav-link"><i class="fas fa-info-circle w-5"></i>{" About"}</Link<Route>></li>
                </ul>
            </div>
        </div>
    }
}
