use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="page page-centered">
            <h1>{ t::TITLE }</h1>
            <p class="muted">{ t::TEXT }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>
                { t::BACK_HOME }
            </Link<Route>>
        </section>
    }
}
