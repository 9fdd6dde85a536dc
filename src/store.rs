//! Demo Block Store
//!
//! In-memory store playing the external state container for the demo app.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::BlockConfig;
use crate::intent::Intent;
use crate::mock;
use crate::models::{ApplicationItem, ListItem};

/// Simulated fetch latency
const FETCH_LATENCY_MS: u32 = 300;

#[derive(Clone, Debug, Default, Store)]
pub struct BlockState {
    /// Basic list rows
    pub list: Vec<ListItem>,
    /// Applications grid cards
    pub applications: Vec<ApplicationItem>,
    /// A fetch is in flight
    pub loading: bool,
    /// Next generated item number
    pub next_id: usize,
}

impl BlockState {
    pub fn new() -> Self {
        Self {
            applications: mock::fake_applications(8),
            ..Default::default()
        }
    }

    /// Reduce one intent into the state
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Fetch { count } => {
                self.list = mock::fake_list(count);
                self.next_id = self.next_id.max(count);
            }
            Intent::Submit(payload) if payload.is_create() => {
                let mut item = mock::fake_list_item(self.next_id);
                item.apply_values(&payload.values);
                self.next_id += 1;
                self.list.push(item);
            }
            Intent::Submit(payload) => {
                if let Some(item) = self.list.iter_mut().find(|item| item.id == payload.id) {
                    item.apply_values(&payload.values);
                }
            }
            Intent::Remove(removal) => {
                self.list.retain(|item| item.id != removal.id());
            }
        }
    }
}

pub type BlockStore = Store<BlockState>;

/// Log the action and apply the intent; fetches resolve after a short delay
pub fn dispatch(store: BlockStore, config: &BlockConfig, intent: Intent) {
    match intent.to_action(config) {
        Ok(action) => tracing::info!(
            target: "store",
            "{}",
            serde_json::to_string(&action).unwrap_or_else(|_| action.kind.clone())
        ),
        Err(e) => tracing::warn!(target: "store", "could not render action: {}", e),
    }

    if let Intent::Fetch { count } = intent {
        *store.loading().write() = true;
        spawn_local(async move {
            TimeoutFuture::new(FETCH_LATENCY_MS).await;
            store.update(|state| {
                state.apply(Intent::Fetch { count });
                state.loading = false;
            });
            tracing::debug!(target: "store", "fetched {} items", count);
        });
    } else {
        store.update(|state| state.apply(intent));
    }
}
