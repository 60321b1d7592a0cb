use inkscribe_shared::Category;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::article_card::ArticleCard,
    hooks::{use_content_store, use_scroll_to_top, use_site_config},
    i18n::{
        current::{common, home as t},
        fill_one,
    },
    router::{BlogQuery, Route},
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let store = use_content_store();
    let config = use_site_config();

    let featured = store.featured().cloned();
    let recent = store.recent(config.recent_count).to_vec();

    html! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">{ t::HERO_TITLE }</h1>
                <p class="hero-subtitle">{ t::HERO_SUBTITLE }</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Blog} classes={classes!("btn", "btn-primary")}>
                        { t::EXPLORE }{" "}{ common::ARROW_RIGHT }
                    </Link<Route>>
                    <Link<Route> to={Route::About} classes={classes!("btn", "btn-outline")}>
                        { t::LEARN_MORE }
                    </Link<Route>>
                </div>
            </section>

            <section class="stats-grid">
                { for t::STATS.iter().map(|(value, label)| html! {
                    <div key={*label} class="stat">
                        <div class="stat-value">{ *value }</div>
                        <div class="muted">{ *label }</div>
                    </div>
                }) }
            </section>

            if let Some(article) = featured {
                <section class="section">
                    <h2 class="section-title">{ t::FEATURED_TITLE }</h2>
                    <ArticleCard article={article} featured=true />
                </section>
            }

            <section class="section">
                <div class="section-header">
                    <h2 class="section-title">{ t::RECENT_TITLE }</h2>
                    <Link<Route> to={Route::Blog} classes={classes!("btn", "btn-outline")}>
                        { t::VIEW_ALL }{" "}{ common::ARROW_RIGHT }
                    </Link<Route>>
                </div>
                <div class="article-grid">
                    { for recent.into_iter().map(|article| {
                        let key = article.id.clone();
                        html! { <ArticleCard key={key} article={article} /> }
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{ t::CATEGORIES_TITLE }</h2>
                <div class="category-grid">
                    { for Category::ALL.into_iter().map(|category| {
                        let count = store
                            .articles()
                            .iter()
                            .filter(|article| article.category == category.as_str())
                            .count();
                        html! {
                            <Link<Route, BlogQuery>
                                key={category.as_str()}
                                to={Route::Blog}
                                query={Some(BlogQuery::category(category.as_str()))}
                                classes={classes!("category-tile")}
                            >
                                <h3 class="capitalize">{ category.as_str() }</h3>
                                <span class="muted">{ fill_one(t::CATEGORY_COUNT_TEMPLATE, count) }</span>
                            </Link<Route, BlogQuery>>
                        }
                    }) }
                </div>
            </section>
        </div>
    }
}
