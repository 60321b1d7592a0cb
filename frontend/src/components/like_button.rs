use inkscribe_shared::LikeState;
use yew::prelude::*;

use crate::i18n::current::like_button as t;

#[derive(Properties, PartialEq)]
pub struct LikeButtonProps {
    pub initial_likes: u32,
    /// Told the new liked flag after every click.
    #[prop_or_default]
    pub on_like: Callback<bool>,
}

#[function_component(LikeButton)]
pub fn like_button(props: &LikeButtonProps) -> Html {
    let initial_likes = props.initial_likes;
    let state = use_state(|| LikeState::new(initial_likes));

    let onclick = {
        let state = state.clone();
        let on_like = props.on_like.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.toggle_with(|liked| on_like.emit(liked));
            state.set(next);
        })
    };

    let liked = state.liked();
    html! {
        <button
            type="button"
            class={classes!("btn", "btn-sm", "like-button", liked.then_some("liked"))}
            aria-pressed={liked.to_string()}
            aria-label={if liked { t::ARIA_UNLIKE } else { t::ARIA_LIKE }}
            onclick={onclick}
        >
            <span class="like-icon" aria-hidden="true">{ if liked { "♥" } else { "♡" } }</span>
            <span>{ state.label() }</span>
        </button>
    }
}
