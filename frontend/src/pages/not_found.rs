use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="landing-page not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center;">
            <h1>{"Nothing in this vault"}</h1>
            <p>{"The page you were looking for has moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">{"Back to the shop"}</Link<Route>>
        </div>
    }
}
