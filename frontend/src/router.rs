use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/blog")]
    Blog,

    #[at("/blog/:id")]
    BlogDetail { id: String },

    #[at("/about")]
    About,

    #[at("/contact")]
    Contact,

    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of the blog listing, e.g. `/blog?category=design`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl BlogQuery {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Blog => html! { <pages::blog::BlogPage /> },
        Route::BlogDetail {
            id,
        } => {
            html! { <pages::blog_detail::BlogDetailPage id={id} /> }
        },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::Contact => html! { <pages::contact::ContactPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <Header />
                <main class="app-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
