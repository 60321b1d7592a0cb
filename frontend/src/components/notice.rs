use inkscribe_shared::FormError;
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::notice as t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast-style message shown after a form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeMessage {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl NoticeMessage {
    pub fn success(title: &str, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            text: text.into(),
        }
    }

    /// Validation failure; `missing_text` replaces the generic missing-field
    /// wording the way each form phrases it.
    pub fn form_error(err: &FormError, missing_text: &str) -> Self {
        let text = match err {
            FormError::MissingFields(_) => missing_text.to_string(),
            FormError::InvalidEmail(_) => err.to_string(),
        };
        Self {
            kind: NoticeKind::Error,
            title: err.title().to_string(),
            text,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: Option<NoticeMessage>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 4000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, message)| {
                if *auto_dismiss && *visible && message.is_some() {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    let Some(message) = props.message.as_ref() else {
        return Html::default();
    };
    if !*is_open {
        return Html::default();
    }

    let kind_class = match message.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
    };
    let role = match message.kind {
        NoticeKind::Success => "status",
        NoticeKind::Error => "alert",
    };

    html! {
        <div class={classes!("notice", kind_class)} role={role} aria-live="polite">
            <div class="notice-body">
                <p class="notice-title">{ &message.title }</p>
                <p class="notice-text">{ &message.text }</p>
            </div>
            <button
                type="button"
                class="notice-close"
                aria-label={t::CLOSE_ARIA}
                onclick={dismiss.reform(|_: MouseEvent| ())}
            >
                {"×"}
            </button>
        </div>
    }
}
