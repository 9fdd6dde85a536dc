//! Dropdown Menu Component
//!
//! Hover or click to reveal a menu of links or actions.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub key: String,
    pub label: String,
    /// External link opened in a new tab; `None` makes the entry an action
    pub href: Option<String>,
}

impl MenuEntry {
    pub fn action(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            href: None,
        }
    }

    pub fn link(label: &str, href: &str) -> Self {
        Self {
            key: href.to_string(),
            label: label.to_string(),
            href: Some(href.to_string()),
        }
    }
}

/// Dropdown menu around a trigger
///
/// # Arguments
/// * `entries` - Menu entries in display order
/// * `on_select` - Called with the entry key when an action entry is clicked
#[component]
pub fn Dropdown(
    entries: Vec<MenuEntry>,
    #[prop(optional, into)] on_select: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let entries = StoredValue::new(entries);

    view! {
        <div
            class="dropdown"
            on:mouseenter=move |_| set_open.set(true)
            on:mouseleave=move |_| set_open.set(false)
        >
            <span class="dropdown-trigger" on:click=move |_| set_open.update(|o| *o = !*o)>
                {children()}
            </span>
            <Show when=move || open.get()>
                <ul class="dropdown-menu">
                    {entries.get_value().into_iter().map(|entry| {
                        let label = entry.label.clone();
                        match entry.href {
                            Some(href) => view! {
                                <li class="dropdown-menu-item">
                                    <a target="_blank" rel="noopener noreferrer" href=href>{label}</a>
                                </li>
                            }.into_any(),
                            None => {
                                let key = entry.key.clone();
                                view! {
                                    <li
                                        class="dropdown-menu-item"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            set_open.set(false);
                                            if let Some(on_select) = on_select {
                                                on_select.run(key.clone());
                                            }
                                        }
                                    >
                                        {label}
                                    </li>
                                }.into_any()
                            }
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
