use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::asset_path, hooks::use_site_config, i18n::current::header as t, router::Route,
};

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, t::NAV_HOME),
    (Route::Blog, t::NAV_BLOG),
    (Route::About, t::NAV_ABOUT),
    (Route::Contact, t::NAV_CONTACT),
];

fn is_active(current: Option<&Route>, item: &Route) -> bool {
    match (current, item) {
        (Some(Route::BlogDetail { .. }), Route::Blog) => true,
        (Some(current), item) => current == item,
        (None, _) => false,
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_site_config();
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let nav_links = NAV_ITEMS
        .into_iter()
        .map(|(item, label)| {
            let active = is_active(route.as_ref(), &item);
            html! {
                <li key={label} onclick={close_mobile_menu.clone()}>
                    <Link<Route> to={item} classes={classes!("nav-link", active.then_some("active"))}>
                        { label }
                    </Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <header class="site-header">
            <nav class="site-nav">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    <img class="brand-logo" src={asset_path("logo.svg")} alt="" aria-hidden="true" />
                    <span class="brand-name">{ &config.site_name }</span>
                </Link<Route>>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-expanded={mobile_menu_open.to_string()}
                    aria-label={if *mobile_menu_open { t::CLOSE_MENU } else { t::OPEN_MENU }}
                    onclick={toggle_mobile_menu}
                >
                    { if *mobile_menu_open { "✕" } else { "☰" } }
                </button>
                <ul class={classes!("nav-links", mobile_menu_open.then_some("open"))}>
                    { nav_links }
                </ul>
            </nav>
        </header>
    }
}
