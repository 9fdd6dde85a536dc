//! Basic List Page Component
//!
//! Editable list with create/edit/delete actions. Data comes in as signals
//! and every mutation leaves as an [`Intent`] through `dispatch`.

use leptos::html;
use leptos::prelude::*;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::dropdown::{Dropdown, MenuEntry};
use crate::components::operation_modal::OperationModal;
use crate::components::pager::Pager;
use crate::components::progress::ProgressBar;
use crate::context::use_block_context;
use crate::dialog::{initial_fetch, DialogState, RemovalState};
use crate::filter::{ListFilter, StatusFilter};
use crate::focus::blur_next_tick;
use crate::format::format_timestamp;
use crate::intent::Intent;
use crate::models::{ItemFormValues, ItemStatus, ListItem};
use chrono::{DateTime, Utc};
use crate::pagination::Pagination;

/// Entries of a row's "more" menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoreAction {
    Edit,
    Delete,
}

impl MoreAction {
    pub fn key(&self) -> &'static str {
        match self {
            MoreAction::Edit => "edit",
            MoreAction::Delete => "delete",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "edit" => Some(MoreAction::Edit),
            "delete" => Some(MoreAction::Delete),
            _ => None,
        }
    }
}

/// Row identity plus every rendered field, so an edited item re-renders
pub type RowKey = (
    String,
    String,
    String,
    String,
    DateTime<Utc>,
    u8,
    ItemStatus,
    String,
    String,
);

pub fn row_key(item: &ListItem) -> RowKey {
    (
        item.id.clone(),
        item.title.clone(),
        item.sub_description.clone(),
        item.owner.clone(),
        item.created_at,
        item.percent,
        item.status,
        item.logo.clone(),
        item.href.clone(),
    )
}

/// Header summary cell
#[component]
fn Info(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional)] bordered: bool,
) -> impl IntoView {
    view! {
        <div class="header-info">
            <span>{title}</span>
            <p>{value}</p>
            {bordered.then(|| view! { <em /> })}
        </div>
    }
}

#[component]
fn ListContent(item: ListItem) -> impl IntoView {
    let labels = use_block_context().labels();
    view! {
        <div class="list-content">
            <div class="list-content-item">
                <span>{labels.owner}</span>
                <p>{item.owner.clone()}</p>
            </div>
            <div class="list-content-item">
                <span>{labels.start_time}</span>
                <p>{format_timestamp(&item.created_at)}</p>
            </div>
            <div class="list-content-item">
                <ProgressBar percent=item.percent status=item.status stroke_width=6 width=180 />
            </div>
        </div>
    }
}

/// Status tabs and search box
#[component]
fn ExtraContent(filter: RwSignal<ListFilter>) -> impl IntoView {
    let labels = use_block_context().labels();
    let (query, set_query) = signal(String::new());
    let tabs = StatusFilter::ALL
        .iter()
        .map(|&tab| {
            let label = match tab {
                StatusFilter::All => labels.filter_all.clone(),
                StatusFilter::Progress => labels.filter_progress.clone(),
                StatusFilter::Waiting => labels.filter_waiting.clone(),
            };
            (tab, label)
        })
        .collect::<Vec<_>>();

    view! {
        <div class="extra-content">
            <div class="radio-group">
                {tabs.into_iter().map(|(tab, label)| view! {
                    <button
                        class={move || if filter.get().status == tab { "radio-button active" } else { "radio-button" }}
                        value=tab.value()
                        on:click=move |_| filter.update(|f| f.status = tab)
                    >
                        {label}
                    </button>
                }).collect_view()}
            </div>
            <span class="extra-content-search">
                <input
                    type="search"
                    placeholder=labels.search_placeholder.clone()
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            filter.update(|f| f.query = query.get_untracked());
                        }
                    }
                />
                <button class="search-button" on:click=move |_| filter.update(|f| f.query = query.get_untracked())>
                    "⌕"
                </button>
            </span>
        </div>
    }
}

/// Basic list page
///
/// # Arguments
/// * `list` - Items owned by the store
/// * `loading` - Whether the store is fetching
/// * `dispatch` - Receives every intent the page emits
#[component]
pub fn BasicListPage(
    #[prop(into)] list: Signal<Vec<ListItem>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] dispatch: Callback<Intent>,
) -> impl IntoView {
    let ctx = use_block_context();
    let config = ctx.config();
    let labels = StoredValue::new(config.labels.clone());

    let add_button = NodeRef::<html::Button>::new();
    let dialog = RwSignal::new(DialogState::default());
    let removal = RwSignal::new(RemovalState::default());
    let filter = RwSignal::new(ListFilter::default());
    let pagination = RwSignal::new(Pagination::new(config.page_size, config.total));

    // Initial load, once per mount
    let fetch_count = config.fetch_count;
    Effect::new(move |prev: Option<()>| {
        if let Some(intent) = initial_fetch(prev, fetch_count) {
            dispatch.run(intent);
        }
    });

    let filtered = Memo::new(move |_| filter.with(|f| f.apply(&list.get())));
    let filtered_len = Signal::derive(move || filtered.with(|items| items.len()));
    let visible_items = move || {
        let items = filtered.get();
        let range = pagination.get().visible_range(items.len());
        items[range].to_vec()
    };

    // Keep the current page in range when filtering shrinks the data
    Effect::new(move |_| {
        let len = filtered_len.get();
        pagination.update(|p| p.go_to(p.current(), len));
    });

    let show_modal = move || dialog.update(|d| d.open_create());
    let show_edit_modal = move |item: ListItem| dialog.update(|d| d.open_edit(item));

    let on_more = move |key: String, item: ListItem| match MoreAction::from_key(&key) {
        Some(MoreAction::Edit) => show_edit_modal(item),
        Some(MoreAction::Delete) => removal.update(|r| r.request(&item)),
        None => tracing::warn!(target: "basic_list", "unknown menu key {}", key),
    };

    let confirm_removal = Callback::new(move |_: ()| {
        if let Some(intent) = removal.try_update(|r| r.confirm()).flatten() {
            dispatch.run(intent);
        }
    });
    let dismiss_removal = Callback::new(move |_: ()| removal.update(|r| r.dismiss()));

    let handle_done = Callback::new(move |_: ()| {
        blur_next_tick(add_button);
        dialog.update(|d| d.finish());
    });
    let handle_cancel = Callback::new(move |_: ()| {
        blur_next_tick(add_button);
        dialog.update(|d| d.cancel());
    });
    let handle_submit = Callback::new(move |values: ItemFormValues| {
        blur_next_tick(add_button);
        let intent = dialog.try_update(|d| d.submit(values)).flatten();
        if let Some(intent) = intent {
            dispatch.run(intent);
        }
    });

    let more_entries = move || {
        labels.with_value(|l| {
            vec![
                MenuEntry::action(MoreAction::Edit.key(), &l.edit),
                MenuEntry::action(MoreAction::Delete.key(), &l.delete),
            ]
        })
    };

    let l = labels.get_value();
    view! {
        <div class="standard-list">
            <div class="card card-borderless">
                <div class="row">
                    <div class="col col-sm-8 col-xs-24">
                        <Info title=l.header_tasks.clone() value="8" bordered=true />
                    </div>
                    <div class="col col-sm-8 col-xs-24">
                        <Info title=l.header_average.clone() value="32 min" bordered=true />
                    </div>
                    <div class="col col-sm-8 col-xs-24">
                        <Info title=l.header_completed.clone() value="24" />
                    </div>
                </div>
            </div>

            <div class="card card-borderless list-card" style="margin-top: 24px">
                <div class="card-head">
                    <div class="card-head-title">{l.list_title.clone()}</div>
                    <ExtraContent filter=filter />
                </div>
                <div class="card-body" style="padding: 0 32px 40px 32px">
                    <button
                        class="btn btn-dashed"
                        style="width: 100%; margin-bottom: 8px"
                        node_ref=add_button
                        on:click=move |_| show_modal()
                    >
                        "+ " {l.add.clone()}
                    </button>

                    <div class=move || if loading.get() { "list list-lg list-loading" } else { "list list-lg" }>
                        <Show when=move || loading.get()>
                            <div class="list-spinner"></div>
                        </Show>
                        <For
                            each=visible_items
                            key=row_key
                            children=move |item| {
                                let edit_item = item.clone();
                                let menu_item = item.clone();
                                view! {
                                    <div class="list-item">
                                        <div class="list-item-meta">
                                            <Avatar src=item.logo.clone() size=AvatarSize::Large square=true />
                                            <div class="list-item-meta-content">
                                                <h4 class="list-item-meta-title">
                                                    <a href=item.href.clone()>{item.title.clone()}</a>
                                                </h4>
                                                <div class="list-item-meta-description">
                                                    {item.sub_description.clone()}
                                                </div>
                                            </div>
                                        </div>
                                        <ListContent item=item.clone() />
                                        <ul class="list-item-action">
                                            <li>
                                                <a
                                                    href="#"
                                                    on:click=move |ev| {
                                                        ev.prevent_default();
                                                        show_edit_modal(edit_item.clone());
                                                    }
                                                >
                                                    {labels.with_value(|l| l.edit.clone())}
                                                </a>
                                            </li>
                                            <li>
                                                <Dropdown
                                                    entries=more_entries()
                                                    on_select=Callback::new(move |key: String| on_more(key, menu_item.clone()))
                                                >
                                                    <a>{labels.with_value(|l| l.more.clone())} " ▾"</a>
                                                </Dropdown>
                                            </li>
                                        </ul>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <Pager state=pagination len=filtered_len />
                </div>
            </div>

            <OperationModal
                done=Signal::derive(move || dialog.with(|d| d.is_done()))
                current=Signal::derive(move || dialog.with(|d| d.current().cloned()))
                visible=Signal::derive(move || dialog.with(|d| d.is_open()))
                on_done=handle_done
                on_cancel=handle_cancel
                on_submit=handle_submit
            />

            <ConfirmModal
                open=Signal::derive(move || removal.with(|r| r.is_pending()))
                subject=Signal::derive(move || {
                    removal.with(|r| r.pending().map(|req| req.title().to_string()).unwrap_or_default())
                })
                title=l.delete_title.clone()
                content=l.delete_content.clone()
                ok_text=l.confirm.clone()
                cancel_text=l.cancel.clone()
                on_ok=confirm_removal
                on_cancel=dismiss_removal
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_action_keys() {
        for action in [MoreAction::Edit, MoreAction::Delete] {
            assert_eq!(MoreAction::from_key(action.key()), Some(action));
        }
        assert_eq!(MoreAction::from_key("share"), None);
    }

    #[test]
    fn test_row_key_tracks_edits() {
        let mut item = crate::mock::fake_list_item(3);
        let before = row_key(&item);
        assert_eq!(row_key(&item.clone()), before);

        item.apply_values(&ItemFormValues {
            title: "Renamed".to_string(),
            created_at: item.created_at,
            owner: item.owner.clone(),
            sub_description: item.sub_description.clone(),
        });
        let after = row_key(&item);
        assert_ne!(after, before);
        assert_eq!(after.0, before.0);

        item.status = ItemStatus::Exception;
        assert_ne!(row_key(&item), after);
    }
}
