use inkscribe_shared::{Category, NewsletterForm};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::notice::{Notice, NoticeMessage},
    hooks::use_site_config,
    i18n::{
        current::{footer as t, header as nav},
        fill_one,
    },
    router::{BlogQuery, Route},
    utils::{input_value, log_warn},
};

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();
    let newsletter = use_state(NewsletterForm::default);
    let notice = use_state(|| None::<NoticeMessage>);

    let on_email = {
        let newsletter = newsletter.clone();
        Callback::from(move |e: InputEvent| {
            newsletter.set(NewsletterForm {
                email: input_value(&e),
            })
        })
    };

    let on_subscribe = {
        let newsletter = newsletter.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut form = (*newsletter).clone();
            match form.submit() {
                Ok(email) => {
                    newsletter.set(form);
                    notice.set(Some(NoticeMessage::success(
                        t::SUBSCRIBED_TITLE,
                        fill_one(t::SUBSCRIBED_TEMPLATE, email),
                    )));
                },
                Err(err) => {
                    log_warn(&format!("newsletter signup rejected: {err}"));
                    notice.set(Some(NoticeMessage::form_error(&err, &err.to_string())));
                },
            }
        })
    };

    let on_notice_close = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <span class="brand-name">{ &config.site_name }</span>
                    <p class="muted">{ t::TAGLINE }</p>
                    <p class="muted">
                        <a href={format!("mailto:{}", config.contact.email)}>{ &config.contact.email }</a>
                    </p>
                </div>
                <div>
                    <h3>{ t::QUICK_LINKS }</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{ nav::NAV_HOME }</Link<Route>></li>
                        <li><Link<Route> to={Route::Blog}>{ nav::NAV_BLOG }</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{ nav::NAV_ABOUT }</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{ nav::NAV_CONTACT }</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3>{ t::CATEGORIES }</h3>
                    <ul>
                        { for Category::ALL.into_iter().map(|category| html! {
                            <li key={category.as_str()}>
                                <Link<Route, BlogQuery>
                                    to={Route::Blog}
                                    query={Some(BlogQuery::category(category.as_str()))}
                                    classes={classes!("capitalize")}
                                >
                                    { category.as_str() }
                                </Link<Route, BlogQuery>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{ t::NEWSLETTER_TITLE }</h3>
                    <p class="muted">{ t::NEWSLETTER_TEXT }</p>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            placeholder={t::NEWSLETTER_PLACEHOLDER}
                            value={newsletter.email.clone()}
                            oninput={on_email}
                        />
                        <button type="submit" class="btn btn-primary">{ t::SUBSCRIBE }</button>
                    </form>
                    <Notice message={(*notice).clone()} on_close={on_notice_close} />
                </div>
            </div>
            <p class="footer-bottom muted">{ fill_one(t::COPYRIGHT_TEMPLATE, &config.site_name) }</p>
        </footer>
    }
}
