use inkscribe_shared::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    i18n::current::{article_card as t, common},
    router::Route,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    /// Wide layout used for the featured story.
    #[prop_or_default]
    pub featured: bool,
    /// When set, tags become buttons that report the clicked tag.
    #[prop_or_default]
    pub on_tag: Option<Callback<String>>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::BlogDetail {
        id: article.id.clone(),
    };

    let tags = article.tags.iter().map(|tag| match props.on_tag.as_ref() {
        Some(on_tag) => {
            let onclick = {
                let on_tag = on_tag.clone();
                let tag = tag.clone();
                Callback::from(move |_: MouseEvent| on_tag.emit(tag.clone()))
            };
            html! {
                <li key={tag.clone()}>
                    <button type="button" class="tag-pill" onclick={onclick}>{ tag }</button>
                </li>
            }
        },
        None => html! { <li key={tag.clone()}><span class="tag-pill">{ tag }</span></li> },
    });

    html! {
        <article class={classes!("article-card", props.featured.then_some("article-card-featured"))}>
            <Link<Route> to={detail_route.clone()} classes={classes!("article-image")}>
                <img src={article.image.clone()} alt={article.title.clone()} loading="lazy" />
                <span class="category-badge">{ &article.category }</span>
                if article.featured {
                    <span class="featured-badge">{ t::FEATURED }</span>
                }
            </Link<Route>>
            <div class="article-body">
                <div class="post-meta">
                    <span class="post-meta-item">{ &article.date }</span>
                    <span class="post-meta-item">{ &article.read_time }</span>
                </div>
                <h3 class="article-title">
                    <Link<Route> to={detail_route.clone()} classes={classes!("article-title-link")}>
                        { &article.title }
                    </Link<Route>>
                </h3>
                <p class="article-excerpt">{ &article.excerpt }</p>
                <ul class="post-tags">{ for tags }</ul>
                <div class="post-footer">
                    <span class="post-author">
                        <img class="avatar" src={article.author_avatar.clone()} alt={article.author.clone()} />
                        { &article.author }
                    </span>
                    <span class="post-stats">
                        <span>{ format!("♥ {}", article.likes) }</span>
                        <span>{ format!("💬 {}", article.comments) }</span>
                    </span>
                </div>
                <Link<Route> to={detail_route} classes={classes!("read-more")}>
                    { t::READ_MORE }{" "}{ common::ARROW_RIGHT }
                </Link<Route>>
            </div>
        </article>
    }
}
