use inkscribe_shared::ContactForm;
use yew::prelude::*;

use crate::{
    components::notice::{Notice, NoticeMessage},
    hooks::{use_scroll_to_top, use_site_config},
    i18n::current::{common, contact as t},
    utils::{input_value, log_warn, textarea_value},
};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_scroll_to_top();
    let config = use_site_config();
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<NoticeMessage>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ContactForm {
                name: input_value(&e),
                ..(*form).clone()
            })
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ContactForm {
                email: input_value(&e),
                ..(*form).clone()
            })
        })
    };
    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ContactForm {
                subject: input_value(&e),
                ..(*form).clone()
            })
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ContactForm {
                message: textarea_value(&e),
                ..(*form).clone()
            })
        })
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(_message) => {
                    form.set(next);
                    notice.set(Some(NoticeMessage::success(t::SENT_TITLE, t::SENT_TEXT)));
                },
                Err(err) => {
                    log_warn(&format!("contact form rejected: {err}"));
                    notice.set(Some(NoticeMessage::form_error(&err, t::MISSING_TEXT)));
                },
            }
        })
    };

    let on_notice_close = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let details = [
        (t::EMAIL, config.contact.email.clone(), format!("mailto:{}", config.contact.email)),
        (t::PHONE, config.contact.phone.clone(), config.phone_link()),
    ];

    html! {
        <div class="page contact-page">
            <header class="page-header">
                <h1>{ t::TITLE }</h1>
                <p class="muted">{ t::SUBTITLE }</p>
            </header>

            <div class="contact-grid">
                <aside class="contact-details">
                    { for details.into_iter().map(|(title, value, href)| html! {
                        <div key={title} class="card">
                            <h3>{ title }</h3>
                            <a href={href}>{ value }</a>
                        </div>
                    }) }
                    <div class="card">
                        <h3>{ t::ADDRESS }</h3>
                        <p class="muted">{ &config.contact.address }</p>
                    </div>
                </aside>

                <form class="contact-form card" onsubmit={on_submit}>
                    <h2>{ t::FORM_TITLE }</h2>
                    <div class="form-row">
                        <label>
                            { t::NAME_LABEL }{" "}{ common::REQUIRED_MARK }
                            <input
                                type="text"
                                placeholder={t::NAME_PLACEHOLDER}
                                value={form.name.clone()}
                                oninput={on_name}
                            />
                        </label>
                        <label>
                            { t::EMAIL_LABEL }{" "}{ common::REQUIRED_MARK }
                            <input
                                type="email"
                                placeholder={t::EMAIL_PLACEHOLDER}
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                        </label>
                    </div>
                    <label>
                        { t::SUBJECT_LABEL }
                        <input
                            type="text"
                            placeholder={t::SUBJECT_PLACEHOLDER}
                            value={form.subject.clone()}
                            oninput={on_subject}
                        />
                    </label>
                    <label>
                        { t::MESSAGE_LABEL }{" "}{ common::REQUIRED_MARK }
                        <textarea
                            rows="6"
                            placeholder={t::MESSAGE_PLACEHOLDER}
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                    </label>
                    <button type="submit" class="btn btn-primary">{ t::SEND }</button>
                    <Notice message={(*notice).clone()} on_close={on_notice_close} />
                </form>
            </div>
        </div>
    }
}
