//! Block Models
//!
//! Data structures supplied by the store (camelCase on the wire).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Progress status of a list item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Normal,
    Active,
    Exception,
    Success,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Normal => "normal",
            ItemStatus::Active => "active",
            ItemStatus::Exception => "exception",
            ItemStatus::Success => "success",
        }
    }
}

/// Basic list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sub_description: String,
    #[serde(default)]
    pub owner: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "clamped_percent")]
    pub percent: u8,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub href: String,
}

impl ListItem {
    /// Copy submitted form values onto this item
    pub fn apply_values(&mut self, values: &ItemFormValues) {
        self.title = values.title.clone();
        self.created_at = values.created_at;
        self.owner = values.owner.clone();
        self.sub_description = values.sub_description.clone();
    }
}

/// Applications grid card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, deserialize_with = "lenient_counter")]
    pub active_user: Option<f64>,
    #[serde(default, deserialize_with = "lenient_counter")]
    pub new_user: Option<f64>,
}

/// Fields collected by the operation dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFormValues {
    pub title: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub owner: String,
    pub sub_description: String,
}

/// Numbers stay numbers, numeric strings are parsed, everything else is undefined
fn lenient_counter<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(counter_from_value(&value))
}

pub(crate) fn counter_from_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
        _ => None,
    }
}

fn clamped_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(if value.is_nan() { 0 } else { value.clamp(0.0, 100.0).round() as u8 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_item_wire_format() {
        let item: ListItem = serde_json::from_value(json!({
            "id": "fake-list-0",
            "title": "Alipay",
            "subDescription": "A description",
            "owner": "Owner",
            "createdAt": 1_600_000_000_000i64,
            "percent": 130,
            "status": "exception",
            "logo": "https://example.com/logo.png",
            "href": "https://example.com"
        }))
        .unwrap();
        assert_eq!(item.percent, 100);
        assert_eq!(item.status, ItemStatus::Exception);
        assert_eq!(item.created_at.timestamp_millis(), 1_600_000_000_000);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["subDescription"], "A description");
        assert_eq!(back["createdAt"], 1_600_000_000_000i64);
    }

    #[test]
    fn test_list_item_defaults() {
        let item: ListItem = serde_json::from_value(json!({
            "id": "1",
            "title": "t",
            "createdAt": 0
        }))
        .unwrap();
        assert_eq!(item.status, ItemStatus::Normal);
        assert_eq!(item.percent, 0);
        assert!(item.owner.is_empty());
    }

    #[test]
    fn test_lenient_counters() {
        let item: ApplicationItem = serde_json::from_value(json!({
            "id": "a",
            "title": "App",
            "activeUser": "15000",
            "newUser": {"nested": true}
        }))
        .unwrap();
        assert_eq!(item.active_user, Some(15000.0));
        assert_eq!(item.new_user, None);

        let item: ApplicationItem = serde_json::from_value(json!({"id": "b", "title": "B"})).unwrap();
        assert_eq!(item.active_user, None);
        assert_eq!(counter_from_value(&json!("abc")), None);
        assert_eq!(counter_from_value(&json!(null)), None);
        assert_eq!(counter_from_value(&json!(" ")), Some(0.0));
    }
}
