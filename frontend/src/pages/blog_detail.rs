use inkscribe_shared::{group_list_items, render_blocks, Block, BlockGroup};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{comment_section::CommentSection, like_button::LikeButton},
    hooks::{use_content_store, use_scroll_to_top, use_site_config},
    i18n::current::blog_detail as t,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct BlogDetailProps {
    pub id: String,
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading {
            text, ..
        } => match block.presentation_level() {
            Some(1) => html! { <h1 class="content-heading">{ text }</h1> },
            Some(2) => html! { <h2 class="content-heading">{ text }</h2> },
            _ => html! { <h3 class="content-heading">{ text }</h3> },
        },
        Block::Paragraph(text) => html! { <p>{ text }</p> },
        Block::ListItem(text) => html! { <ul><li>{ text }</li></ul> },
        Block::Empty => Html::default(),
    }
}

fn render_content(content: &str) -> Html {
    let blocks = render_blocks(content);
    group_list_items(&blocks)
        .into_iter()
        .map(|group| match group {
            BlockGroup::Single(block) => render_block(block),
            BlockGroup::List(items) => html! {
                <ul class="content-list">
                    { for items.into_iter().map(|item| html! { <li>{ item }</li> }) }
                </ul>
            },
        })
        .collect::<Html>()
}

#[function_component(BlogDetailPage)]
pub fn blog_detail_page(props: &BlogDetailProps) -> Html {
    use_scroll_to_top();
    let store = use_content_store();
    let config = use_site_config();

    let Some(article) = store.get(&props.id) else {
        return html! {
            <section class="page page-centered">
                <h1>{ t::NOT_FOUND_TITLE }</h1>
                <p class="muted">{ t::NOT_FOUND_TEXT }</p>
                <Link<Route> to={Route::Blog} classes={classes!("btn", "btn-primary")}>
                    { t::BACK }
                </Link<Route>>
            </section>
        };
    };

    let content = render_content(&article.content);
    let related = store.related(article, config.related_limit);

    html! {
        <article class="page blog-detail">
            <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                {"← "}{ t::BACK }
            </Link<Route>>

            <div class="detail-hero">
                <img src={article.image.clone()} alt={article.title.clone()} />
            </div>

            <ul class="post-tags" aria-label={t::TAGS}>
                { for article.tags.iter().map(|tag| html! {
                    <li key={tag.clone()}><span class="tag-pill">{ tag }</span></li>
                }) }
            </ul>

            <h1 class="detail-title">{ &article.title }</h1>

            <div class="detail-meta">
                <img class="avatar avatar-lg" src={article.author_avatar.clone()} alt={article.author.clone()} />
                <div>
                    <p class="post-author">{ &article.author }</p>
                    <p class="muted">
                        <span>{ &article.date }</span>{" · "}<span>{ &article.read_time }</span>
                    </p>
                </div>
                <div class="detail-actions">
                    // 换文章时重新挂载，点赞状态不串页
                    <LikeButton key={article.id.clone()} initial_likes={article.likes} />
                </div>
            </div>

            <div class="prose">{ content }</div>

            <CommentSection key={article.id.clone()} article_id={article.id.clone()} />

            if !related.is_empty() {
                <section class="related">
                    <h2 class="section-title">{ t::RELATED_TITLE }</h2>
                    <div class="related-grid">
                        { for related.iter().map(|other| html! {
                            <Link<Route>
                                key={other.id.clone()}
                                to={Route::BlogDetail { id: other.id.clone() }}
                                classes={classes!("related-card")}
                            >
                                <img src={other.image.clone()} alt={other.title.clone()} loading="lazy" />
                                <h3>{ &other.title }</h3>
                                <p class="muted">{ &other.read_time }</p>
                            </Link<Route>>
                        }) }
                    </div>
                </section>
            }
        </article>
    }
}
