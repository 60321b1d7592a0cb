use inkscribe_shared::{popular_tags, BlogListing, CategoryFilter};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{
    components::{article_card::ArticleCard, pagination::Pagination},
    hooks::{use_content_store, use_scroll_to_top, use_site_config},
    i18n::{current::blog as t, fill_one},
    router::BlogQuery,
    utils::{input_value, log_warn},
};

/// `?category=` value to a filter. Missing or unknown values show everything.
fn category_from_query(raw: Option<&str>) -> CategoryFilter {
    match raw.map(str::parse::<CategoryFilter>) {
        None => CategoryFilter::All,
        Some(Ok(filter)) => filter,
        Some(Err(err)) => {
            log_warn(&fill_one(t::UNKNOWN_CATEGORY_TEMPLATE, &err.0));
            CategoryFilter::All
        },
    }
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    use_scroll_to_top();
    let store = use_content_store();
    let config = use_site_config();
    let location = use_location();
    let raw_category = location
        .as_ref()
        .and_then(|loc| loc.query::<BlogQuery>().ok())
        .and_then(|query| query.category);

    let listing = {
        let page_size = config.page_size;
        let initial = raw_category.clone();
        use_state(move || {
            BlogListing::new(page_size).with_category(category_from_query(initial.as_deref()))
        })
    };

    // 地址栏里的分类变化时同步到列表状态
    {
        let listing = listing.clone();
        use_effect_with(raw_category, move |raw| {
            let category = category_from_query(raw.as_deref());
            if listing.category() != category {
                let mut next = (*listing).clone();
                next.set_category(category);
                listing.set(next);
            }
            || ()
        });
    }

    let on_search = {
        let listing = listing.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*listing).clone();
            next.set_query(input_value(&e));
            listing.set(next);
        })
    };

    let on_tag = {
        let listing = listing.clone();
        Callback::from(move |tag: String| {
            let mut next = (*listing).clone();
            next.select_tag(&tag);
            listing.set(next);
        })
    };

    let on_clear = {
        let listing = listing.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*listing).clone();
            next.clear_filters();
            listing.set(next);
        })
    };

    let on_page_change = {
        let listing = listing.clone();
        let store = store.clone();
        Callback::from(move |page: usize| {
            let mut next = (*listing).clone();
            next.go_to_page(store.articles(), page);
            listing.set(next);
        })
    };

    let category_buttons = CategoryFilter::ALL_OPTIONS
        .into_iter()
        .map(|filter| {
            let selected = listing.category() == filter;
            let onclick = {
                let listing = listing.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*listing).clone();
                    next.set_category(filter);
                    listing.set(next);
                })
            };
            html! {
                <button
                    key={filter.as_str()}
                    type="button"
                    class={classes!("btn", "btn-sm", "capitalize", if selected { "btn-primary" } else { "btn-outline" })}
                    aria-pressed={selected.to_string()}
                    onclick={onclick}
                >
                    { filter.as_str() }
                </button>
            }
        })
        .collect::<Html>();

    let tag_badges = popular_tags(store.articles(), config.popular_tag_limit)
        .into_iter()
        .map(|tag| {
            let onclick = {
                let on_tag = on_tag.clone();
                let tag = tag.to_string();
                Callback::from(move |_: MouseEvent| on_tag.emit(tag.clone()))
            };
            html! {
                <button key={tag} type="button" class="tag-pill" onclick={onclick}>{ tag }</button>
            }
        })
        .collect::<Html>();

    let view = listing.view(store.articles());
    let cards = view
        .items
        .iter()
        .map(|article| {
            html! {
                <ArticleCard
                    key={article.id.clone()}
                    article={(*article).clone()}
                    on_tag={on_tag.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="page blog-page">
            <header class="page-header">
                <h1>{ t::TITLE }</h1>
                <p class="muted">{ t::SUBTITLE }</p>
            </header>

            <div class="filters">
                <input
                    type="search"
                    class="search-input"
                    placeholder={t::SEARCH_PLACEHOLDER}
                    value={listing.query().to_string()}
                    oninput={on_search}
                />
                <div class="category-buttons" role="group" aria-label={t::CATEGORIES_ARIA}>
                    { category_buttons }
                </div>
                <div class="tag-list" aria-label={t::TAGS_ARIA}>
                    { tag_badges }
                </div>
            </div>

            <p class="result-count muted">{ view.summary() }</p>

            if view.total_matches == 0 {
                <div class="empty-state">
                    <p>{ t::NO_RESULTS }</p>
                    <button type="button" class="btn btn-primary" onclick={on_clear}>
                        { t::CLEAR_FILTERS }
                    </button>
                </div>
            } else {
                <div class="article-grid">{ cards }</div>
            }

            <Pagination
                current_page={view.page}
                total_pages={view.total_pages}
                on_page_change={on_page_change}
            />
        </div>
    }
}
