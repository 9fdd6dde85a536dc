//! Store Intents
//!
//! Requests a block dispatches to the store, and their namespaced action
//! rendering.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::BlockConfig;
use crate::error::BlockError;
use crate::models::{ItemFormValues, ListItem};

/// Save request: target id (empty when creating) merged with the form values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitPayload {
    pub id: String,
    #[serde(flatten)]
    pub values: ItemFormValues,
}

impl SubmitPayload {
    pub fn is_create(&self) -> bool {
        self.id.is_empty()
    }
}

/// A delete the user has asked for but not yet confirmed
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalRequest {
    id: String,
    title: String,
}

impl RemovalRequest {
    pub fn new(item: &ListItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The only way to obtain a [`ConfirmedRemoval`]
    pub fn confirm(self) -> Intent {
        Intent::Remove(ConfirmedRemoval { id: self.id })
    }
}

/// Removal accepted through the confirm dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedRemoval {
    id: String,
}

impl ConfirmedRemoval {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Fetch { count: usize },
    Submit(SubmitPayload),
    Remove(ConfirmedRemoval),
}

/// Namespaced `{type, payload}` record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Value,
}

impl Intent {
    pub fn verb(&self, remove_as_submit: bool) -> &'static str {
        match self {
            Intent::Fetch { .. } => "fetch",
            Intent::Submit(_) => "submit",
            Intent::Remove(_) if remove_as_submit => "submit",
            Intent::Remove(_) => "remove",
        }
    }

    pub fn to_action(&self, config: &BlockConfig) -> Result<Action, BlockError> {
        let payload = match self {
            Intent::Fetch { count } => json!({ "count": count }),
            Intent::Submit(payload) => serde_json::to_value(payload)?,
            Intent::Remove(removal) => json!({ "id": removal.id }),
        };
        Ok(Action {
            kind: format!("{}/{}", config.namespace(), self.verb(config.remove_as_submit)),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn make_item(id: &str) -> ListItem {
        ListItem {
            id: id.to_string(),
            title: format!("Task {}", id),
            sub_description: String::new(),
            owner: String::new(),
            created_at: DateTime::<Utc>::from_timestamp_millis(0).unwrap(),
            percent: 0,
            status: Default::default(),
            logo: String::new(),
            href: String::new(),
        }
    }

    fn make_values() -> ItemFormValues {
        ItemFormValues {
            title: "Write docs".to_string(),
            created_at: DateTime::<Utc>::from_timestamp_millis(1_000).unwrap(),
            owner: "Fu Xiaoxiao".to_string(),
            sub_description: "Document the blocks".to_string(),
        }
    }

    #[test]
    fn test_confirmed_delete_action() {
        // default store contract: a submit carrying only the id
        let intent = RemovalRequest::new(&make_item("42")).confirm();
        let action = intent.to_action(&BlockConfig::default()).unwrap();
        assert_eq!(action.kind, "listBasicList/submit");
        assert_eq!(action.payload, json!({ "id": "42" }));
    }

    #[test]
    fn test_dedicated_remove_contract() {
        let config = BlockConfig {
            remove_as_submit: false,
            ..Default::default()
        };
        let action = RemovalRequest::new(&make_item("42")).confirm().to_action(&config).unwrap();
        assert_eq!(action.kind, "listBasicList/remove");
        assert_eq!(action.payload, json!({ "id": "42" }));
    }

    #[test]
    fn test_submit_payload_is_flat() {
        let intent = Intent::Submit(SubmitPayload {
            id: String::new(),
            values: make_values(),
        });
        let action = intent.to_action(&BlockConfig::default()).unwrap();
        assert_eq!(action.kind, "listBasicList/submit");
        assert_eq!(
            action.payload,
            json!({
                "id": "",
                "title": "Write docs",
                "createdAt": 1000,
                "owner": "Fu Xiaoxiao",
                "subDescription": "Document the blocks"
            })
        );
    }

    #[test]
    fn test_fetch_action_uses_namespace() {
        let config = BlockConfig {
            namespace: Some("projects".to_string()),
            ..Default::default()
        };
        let action = Intent::Fetch { count: 5 }.to_action(&config).unwrap();
        assert_eq!(action.kind, "projects/fetch");
        assert_eq!(serde_json::to_value(&action).unwrap(), json!({
            "type": "projects/fetch",
            "payload": { "count": 5 }
        }));
    }
}
