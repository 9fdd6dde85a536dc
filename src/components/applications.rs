//! Applications Grid Component
//!
//! Read-only card grid of applications with their user counters.

use leptos::prelude::*;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::dropdown::{Dropdown, MenuEntry};
use crate::context::use_block_context;
use crate::format::{format_thousands, format_wan, WanDisplay, WAN_SUFFIX};
use crate::models::ApplicationItem;

/// Column classes for the xs/sm/md/lg/xl/xxl breakpoints
const GRID_CLASS: &str = "card-grid cols-xs-1 cols-sm-2 cols-md-3 cols-lg-3 cols-xl-4 cols-xxl-4";
const GRID_GUTTER_PX: u32 = 16;

/// Static links behind each card's ellipsis menu
fn item_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::link("1st menu item", "https://www.alipay.com/"),
        MenuEntry::link("2nd menu item", "https://www.taobao.com/"),
        MenuEntry::link("3rd menu item", "https://www.tmall.com/"),
    ]
}

/// Abbreviated counter, with the unit suffix in a raised span
#[component]
fn WanValue(display: WanDisplay) -> impl IntoView {
    match display {
        WanDisplay::Empty => ().into_any(),
        WanDisplay::Plain(s) => s.into_any(),
        WanDisplay::Abbreviated(n) => view! {
            <span>
                {n}
                <span class="wan-suffix" style="position: relative; top: -2px; font-size: 14px; font-style: normal; margin-left: 2px">
                    {WAN_SUFFIX}
                </span>
            </span>
        }
        .into_any(),
    }
}

#[component]
fn CardInfo(active_user: WanDisplay, new_user: String) -> impl IntoView {
    let labels = use_block_context().labels();
    view! {
        <div class="card-info">
            <div>
                <p>{labels.active_users}</p>
                <p><WanValue display=active_user /></p>
            </div>
            <div>
                <p>{labels.new_users}</p>
                <p>{new_user}</p>
            </div>
        </div>
    }
}

#[component]
fn ApplicationCard(item: ApplicationItem) -> impl IntoView {
    let labels = use_block_context().labels();
    view! {
        <div class="card card-hoverable">
            <div class="card-body" style="padding-bottom: 20px">
                <div class="card-meta">
                    <Avatar src=item.avatar.clone() size=AvatarSize::Small />
                    <div class="card-meta-title">{item.title.clone()}</div>
                </div>
                <div class="card-item-content">
                    <CardInfo
                        active_user=format_wan(item.active_user)
                        new_user=format_thousands(item.new_user)
                    />
                </div>
            </div>
            <ul class="card-actions">
                <li title=labels.download>"⤓"</li>
                <li title=labels.edit>"✎"</li>
                <li title=labels.share>"⤴"</li>
                <li>
                    <Dropdown entries=item_menu()>"⋯"</Dropdown>
                </li>
            </ul>
        </div>
    }
}

/// Grid with one card per application
#[component]
pub fn ApplicationsGrid(#[prop(into)] list: Signal<Vec<ApplicationItem>>) -> impl IntoView {
    view! {
        <div class=GRID_CLASS style=format!("gap: {}px", GRID_GUTTER_PX)>
            <For
                each=move || list.get()
                key=|item| item.id.clone()
                children=move |item| view! { <ApplicationCard item=item /> }
            />
        </div>
    }
}
