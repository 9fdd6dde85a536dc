//! Demo App
//!
//! Mounts both blocks against the in-memory demo store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ApplicationsGrid, BasicListPage};
use crate::config::BlockConfig;
use crate::context::provide_block_config;
use crate::intent::Intent;
use crate::store::{self, BlockState, BlockStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = BlockConfig::from_window();
    tracing::info!(target: "app", "mounting {} (namespace {})", config.page_name(), config.namespace());

    let store = Store::new(BlockState::new());
    provide_block_config(config.clone());

    let config = StoredValue::new(config);
    let dispatch = Callback::new(move |intent: Intent| {
        config.with_value(|c| store::dispatch(store, c, intent));
    });

    view! {
        <div class="app-layout">
            <section class="block">
                <h2>"Applications"</h2>
                <ApplicationsGrid list=Signal::derive(move || store.applications().get()) />
            </section>
            <section class="block">
                <BasicListPage
                    list=Signal::derive(move || store.list().get())
                    loading=Signal::derive(move || store.loading().get())
                    dispatch=dispatch
                />
            </section>
        </div>
    }
}
