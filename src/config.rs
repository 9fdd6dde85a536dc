//! Block Configuration
//!
//! Parameters a block is instantiated with: naming, paging, store contract
//! flags and user-visible labels.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::BlockError;
use crate::naming::{is_valid_namespace, BlockName};

/// JS global the host page may set to configure the blocks
pub const WINDOW_CONFIG_KEY: &str = "__ADMIN_BLOCKS_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockConfig {
    /// Page name, e.g. `ListBasicList`
    pub block_name: String,
    /// Store namespace; derived from `block_name` when absent
    pub namespace: Option<String>,
    /// Item count requested by the initial fetch
    pub fetch_count: usize,
    pub page_size: usize,
    /// Pagination total; `None` uses the list length
    pub total: Option<usize>,
    /// Render removal as a field-less `submit` action; `false` emits `remove`
    pub remove_as_submit: bool,
    /// Owner choices in the operation dialog
    pub owners: Vec<String>,
    pub labels: Labels,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            block_name: "ListBasicList".to_string(),
            namespace: None,
            fetch_count: 5,
            page_size: 5,
            total: Some(50),
            remove_as_submit: true,
            owners: vec!["Fu Xiaoxiao".to_string(), "Zhou Maomao".to_string()],
            labels: Labels::default(),
        }
    }
}

impl BlockConfig {
    pub fn from_json(json: &str) -> Result<Self, BlockError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `window.__ADMIN_BLOCKS_CONFIG__`, falling back to defaults
    pub fn from_window() -> Self {
        match Self::try_from_window() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("falling back to default block config: {}", e);
                Self::default()
            }
        }
    }

    fn try_from_window() -> Result<Option<Self>, BlockError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY))
            .map_err(|e| BlockError::Js(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        let config: Self =
            serde_wasm_bindgen::from_value(value).map_err(|e| BlockError::Js(e.to_string()))?;
        config.validate()?;
        Ok(Some(config))
    }

    pub fn validate(&self) -> Result<(), BlockError> {
        BlockName::parse(&self.block_name)?;
        if let Some(ns) = &self.namespace {
            if !is_valid_namespace(ns) {
                return Err(BlockError::InvalidNamespace(ns.clone()));
            }
        }
        if self.page_size == 0 {
            return Err(BlockError::ZeroValue { field: "pageSize" });
        }
        if self.fetch_count == 0 {
            return Err(BlockError::ZeroValue { field: "fetchCount" });
        }
        Ok(())
    }

    /// Store namespace intents are addressed to
    pub fn namespace(&self) -> String {
        if let Some(ns) = &self.namespace {
            return ns.clone();
        }
        BlockName::parse(&self.block_name)
            .map(|name| name.camel_case())
            .unwrap_or_else(|_| self.block_name.clone())
    }

    /// Page component name
    pub fn page_name(&self) -> String {
        BlockName::parse(&self.block_name)
            .map(|name| name.upper_camel_case())
            .unwrap_or_else(|_| self.block_name.clone())
    }
}

/// User-visible strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    pub list_title: String,
    pub add: String,
    pub edit: String,
    pub delete: String,
    pub more: String,
    pub owner: String,
    pub start_time: String,
    pub search_placeholder: String,
    pub filter_all: String,
    pub filter_progress: String,
    pub filter_waiting: String,
    pub delete_title: String,
    pub delete_content: String,
    pub confirm: String,
    pub cancel: String,
    pub active_users: String,
    pub new_users: String,
    pub download: String,
    pub share: String,
    pub modal_add_title: String,
    pub modal_edit_title: String,
    pub save: String,
    pub done_title: String,
    pub done_description: String,
    pub done_ack: String,
    pub field_title: String,
    pub field_description: String,
    pub select_owner: String,
    pub header_tasks: String,
    pub header_average: String,
    pub header_completed: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            list_title: "Basic list".into(),
            add: "Add".into(),
            edit: "Edit".into(),
            delete: "Delete".into(),
            more: "More".into(),
            owner: "Owner".into(),
            start_time: "Start time".into(),
            search_placeholder: "Please enter".into(),
            filter_all: "All".into(),
            filter_progress: "In progress".into(),
            filter_waiting: "Waiting".into(),
            delete_title: "Delete task".into(),
            delete_content: "Are you sure you want to delete this task?".into(),
            confirm: "Confirm".into(),
            cancel: "Cancel".into(),
            active_users: "Active users".into(),
            new_users: "New users".into(),
            download: "Download".into(),
            share: "Share".into(),
            modal_add_title: "Add task".into(),
            modal_edit_title: "Edit task".into(),
            save: "Save".into(),
            done_title: "Operation succeeded".into(),
            done_description: "The task list has been updated.".into(),
            done_ack: "Got it".into(),
            field_title: "Task name".into(),
            field_description: "Description".into(),
            select_owner: "Please select".into(),
            header_tasks: "My tasks".into(),
            header_average: "Average processing time this week".into(),
            header_completed: "Tasks completed this week".into(),
        }
    }
}
