//! Pager Component
//!
//! Page links, size changer and quick jumper over a [`Pagination`] signal.

use leptos::prelude::*;

use crate::pagination::{page_items, PageItem, Pagination, PAGE_SIZE_OPTIONS};

#[component]
pub fn Pager(
    state: RwSignal<Pagination>,
    /// Length of the (filtered) data being paged
    #[prop(into)] len: Signal<usize>,
) -> impl IntoView {
    let (jump_value, set_jump_value) = signal(String::new());
    let page_count = move || state.get().page_count(len.get());

    view! {
        <ul class="pagination">
            <li
                class={move || if state.get().current() <= 1 { "pagination-prev disabled" } else { "pagination-prev" }}
                on:click=move |_| state.update(|p| p.prev(len.get_untracked()))
            >
                "‹"
            </li>
            {move || {
                let current = state.get().current();
                page_items(current, page_count()).into_iter().map(|item| match item {
                    PageItem::Page(page) => view! {
                        <li
                            class={if page == current { "pagination-item active" } else { "pagination-item" }}
                            on:click=move |_| state.update(|p| p.go_to(page, len.get_untracked()))
                        >
                            {page}
                        </li>
                    }.into_any(),
                    PageItem::Ellipsis => view! { <li class="pagination-ellipsis">"•••"</li> }.into_any(),
                }).collect_view()
            }}
            <li
                class={move || if state.get().current() >= page_count() { "pagination-next disabled" } else { "pagination-next" }}
                on:click=move |_| state.update(|p| p.next(len.get_untracked()))
            >
                "›"
            </li>
            <li class="pagination-options">
                <select
                    class="pagination-size-changer"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            state.update(|p| p.set_page_size(size, len.get_untracked()));
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                        <option value=size.to_string() selected={move || state.get().page_size() == size}>
                            {format!("{} / page", size)}
                        </option>
                    }).collect_view()}
                </select>
                <span class="pagination-jumper">
                    "Go to "
                    <input
                        type="text"
                        prop:value=move || jump_value.get()
                        on:input=move |ev| set_jump_value.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                state.update(|p| p.jump(&jump_value.get_untracked(), len.get_untracked()));
                                set_jump_value.set(String::new());
                            }
                        }
                    />
                </span>
            </li>
        </ul>
    }
}
