use inkscribe_shared::avatar_url;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{hooks::use_scroll_to_top, i18n::current::about as t, router::Route};

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page about-page">
            <section class="hero">
                <h1 class="hero-title">{ t::TITLE }</h1>
                <p class="hero-subtitle">{ t::SUBTITLE }</p>
            </section>

            <section class="section story">
                <div>
                    <h2 class="section-title">{ t::STORY_TITLE }</h2>
                    { for t::STORY.iter().map(|paragraph| html! { <p class="muted">{ *paragraph }</p> }) }
                </div>
                <img class="story-image" src={t::STORY_IMAGE} alt={t::TITLE} loading="lazy" />
            </section>

            <section class="section">
                <h2 class="section-title">{ t::IMPACT_TITLE }</h2>
                <div class="stats-grid">
                    { for t::STATS.iter().map(|(value, label)| html! {
                        <div key={*label} class="stat card">
                            <div class="stat-value">{ *value }</div>
                            <div class="muted">{ *label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{ t::TEAM_TITLE }</h2>
                <div class="team-grid">
                    { for t::TEAM.iter().map(|(name, role, bio)| html! {
                        <div key={*name} class="team-member card">
                            <img class="avatar avatar-xl" src={avatar_url(name)} alt={*name} />
                            <h3>{ *name }</h3>
                            <p class="team-role">{ *role }</p>
                            <p class="muted">{ *bio }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{ t::VALUES_TITLE }</h2>
                <div class="values-grid">
                    { for t::VALUES.iter().map(|(title, text)| html! {
                        <div key={*title} class="card">
                            <h3>{ *title }</h3>
                            <p class="muted">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2 class="section-title">{ t::CTA_TITLE }</h2>
                <p class="muted">{ t::CTA_TEXT }</p>
                <Link<Route> to={Route::Contact} classes={classes!("btn", "btn-primary")}>
                    { t::CTA_BUTTON }
                </Link<Route>>
            </section>
        </div>
    }
}
