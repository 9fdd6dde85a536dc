//! Operation Form Draft
//!
//! Raw input strings of the operation dialog and their validation into
//! [`ItemFormValues`].

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::FormError;
use crate::models::{ItemFormValues, ListItem};

/// Minimum description length
pub const MIN_DESCRIPTION_LEN: usize = 5;

/// `<input type="datetime-local">` value format
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub start_time: String,
    pub owner: String,
    pub sub_description: String,
}

impl ItemDraft {
    /// Seed from the edit target, or blank in create mode
    pub fn from_current_in<Tz: TimeZone>(current: Option<&ListItem>, tz: &Tz) -> Self {
        match current {
            Some(item) => Self {
                title: item.title.clone(),
                start_time: item.created_at.with_timezone(tz).naive_local().format(INPUT_FORMAT).to_string(),
                owner: item.owner.clone(),
                sub_description: item.sub_description.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn from_current(current: Option<&ListItem>) -> Self {
        Self::from_current_in(current, &chrono::Local)
    }

    /// Validate, interpreting the start time in `tz`
    pub fn to_values_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<ItemFormValues, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let created_at = parse_start_time(&self.start_time, tz)?;
        let owner = self.owner.trim();
        if owner.is_empty() {
            return Err(FormError::MissingOwner);
        }
        let sub_description = self.sub_description.trim();
        if sub_description.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(FormError::DescriptionTooShort { min: MIN_DESCRIPTION_LEN });
        }
        Ok(ItemFormValues {
            title: title.to_string(),
            created_at,
            owner: owner.to_string(),
            sub_description: sub_description.to_string(),
        })
    }

    pub fn to_values(&self) -> Result<ItemFormValues, FormError> {
        self.to_values_in(&chrono::Local)
    }
}

fn parse_start_time<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::MissingStartTime);
    }
    // browsers may append seconds
    let naive = NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| FormError::InvalidStartTime(raw.to_string()))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| FormError::InvalidStartTime(raw.to_string()))
}
