use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container text-center">
                <p>
                    { format!("© {} Web Dev Mastery Course. All rights reserved.", config::COPYRIGHT_YEAR) }
                </p>
                <div class="footer-links">
                    <Link<Route> to={Route::Terms} classes="footer-link">
                        {"Terms of Service"}
                    </Link<Route>>
                    <Link<Route> to={Route::Privacy} classes="footer-link">
                        {"Privacy Policy"}
                    </Link<Route>>
                </div>
            </div>
        </footer>
    }
}
