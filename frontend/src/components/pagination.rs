use inkscribe_shared::{visible_page_slots, PageSlot};
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let slots = visible_page_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    html! {
        <nav class="pagination" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class="btn btn-outline"
                disabled={prev_disabled}
                onclick={prev_onclick}
            >
                { t::PREVIOUS }
            </button>
            { for slots.into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let is_current = page == current_page;
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={classes!("btn", "btn-icon", if is_current { "btn-primary" } else { "btn-outline" })}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                            aria-current={is_current.then_some(AttrValue::from("page"))}
                            disabled={is_current}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}-{current_page}")}
                        class="pagination-ellipsis"
                        aria-hidden="true"
                    >
                        {"..."}
                    </span>
                },
            }) }
            <button
                type="button"
                class="btn btn-outline"
                disabled={next_disabled}
                onclick={next_onclick}
            >
                { t::NEXT }
            </button>
        </nav>
    }
}
