use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::legal::LEGAL_CSS;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to the course"}</Link<Route>>
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}
