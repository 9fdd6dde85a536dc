//! List Filtering
//!
//! Local status tab and search filtering of the basic list.

use crate::models::{ItemStatus, ListItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Active items
    Progress,
    /// Items not started yet
    Waiting,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Progress, StatusFilter::Waiting];

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Progress => "progress",
            StatusFilter::Waiting => "waiting",
        }
    }

    pub fn matches(&self, status: ItemStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Progress => status == ItemStatus::Active,
            StatusFilter::Waiting => status == ItemStatus::Normal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub status: StatusFilter,
    pub query: String,
}

impl ListFilter {
    pub fn matches(&self, item: &ListItem) -> bool {
        if !self.status.matches(item.status) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&item.title, &item.sub_description, &item.owner]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn apply(&self, items: &[ListItem]) -> Vec<ListItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}
