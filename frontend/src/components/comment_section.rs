use inkscribe_shared::{CommentForm, CommentThread};
use yew::prelude::*;

use crate::{
    components::notice::{Notice, NoticeMessage},
    hooks::use_site_config,
    i18n::current::comments as t,
    utils::{input_value, log_warn, textarea_value},
};

#[derive(Properties, PartialEq)]
pub struct CommentSectionProps {
    /// Remounting with another article id starts a fresh thread.
    pub article_id: String,
}

#[function_component(CommentSection)]
pub fn comment_section(props: &CommentSectionProps) -> Html {
    let config = use_site_config();
    let thread = {
        let avatar_base_url = config.avatar_base_url.clone();
        use_state(move || CommentThread::with_samples().with_avatar_base_url(avatar_base_url))
    };
    let form = use_state(CommentForm::default);
    let notice = use_state(|| None::<NoticeMessage>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(CommentForm {
                name: input_value(&e),
                ..(*form).clone()
            })
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(CommentForm {
                email: input_value(&e),
                ..(*form).clone()
            })
        })
    };
    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(CommentForm {
                content: textarea_value(&e),
                ..(*form).clone()
            })
        })
    };

    let on_submit = {
        let thread = thread.clone();
        let form = form.clone();
        let notice = notice.clone();
        let article_id = props.article_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next_thread = (*thread).clone();
            let mut next_form = (*form).clone();
            match next_thread.submit(&mut next_form).map(|_| ()) {
                Ok(()) => {
                    thread.set(next_thread);
                    form.set(next_form);
                    notice.set(Some(NoticeMessage::success(t::POSTED_TITLE, t::POSTED_TEXT)));
                },
                Err(err) => {
                    log_warn(&format!("comment on {article_id} rejected: {err}"));
                    notice.set(Some(NoticeMessage::form_error(&err, t::MISSING_TEXT)));
                },
            }
        })
    };

    let on_notice_close = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <section class="comment-section">
            <h2 class="section-title">{ thread.heading() }</h2>

            <form class="comment-form card" onsubmit={on_submit}>
                <h3>{ t::LEAVE_COMMENT }</h3>
                <div class="form-row">
                    <input
                        type="text"
                        placeholder={t::NAME_PLACEHOLDER}
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    <input
                        type="email"
                        placeholder={t::EMAIL_PLACEHOLDER}
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </div>
                <textarea
                    rows="4"
                    placeholder={t::CONTENT_PLACEHOLDER}
                    value={form.content.clone()}
                    oninput={on_content}
                />
                <button type="submit" class="btn btn-primary">{ t::POST }</button>
            </form>

            <Notice message={(*notice).clone()} on_close={on_notice_close} />

            if thread.is_empty() {
                <p class="empty-state">{ t::EMPTY }</p>
            } else {
                <ul class="comment-list">
                    { for thread.comments().iter().map(|comment| html! {
                        <li key={comment.id.clone()} class="comment card">
                            <img class="avatar" src={comment.avatar.clone()} alt={comment.author.clone()} />
                            <div class="comment-body">
                                <div class="comment-meta">
                                    <span class="comment-author">{ &comment.author }</span>
                                    <span class="comment-date">{ &comment.date }</span>
                                </div>
                                <p>{ &comment.content }</p>
                            </div>
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
