use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Lost your way?"}</h1>
            <p>{"Sorry, we can't find that page. You'll find lots to explore on the home page."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                {"Reelview Home"}
            </Link<Route>>
        </div>
    }
}
