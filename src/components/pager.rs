use yew::prelude::*;

use crate::config::CONFIG;
use crate::utils::{page_window, PageItem};

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub current: u32,
    pub total: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub on_page: Callback<u32>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    if props.total <= 1 {
        return html! {};
    }

    let go = |page: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page))
    };

    let button = |page: u32| {
        let class = if page == props.current { "page-btn active" } else { "page-btn" };
        html! { <button {class} onclick={go(page)}>{page}</button> }
    };

    html! {
        <nav class="pager">
            <button class="page-btn" disabled={!props.has_prev} onclick={go(props.current.saturating_sub(1).max(1))}>
                {"‹ Prev"}
            </button>
            { for page_window(props.current, props.total, CONFIG.jobs.pagination_window).into_iter().map(|item| match item {
                PageItem::Page(page) | PageItem::Last(page) => button(page),
                PageItem::Ellipsis => html! { <span class="page-ellipsis">{"…"}</span> },
            }) }
            <button class="page-btn" disabled={!props.has_next} onclick={go((props.current + 1).min(props.total))}>
                {"Next ›"}
            </button>
        </nav>
    }
}
