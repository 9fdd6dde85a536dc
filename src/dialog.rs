//! Operation Dialog State
//!
//! Transient view state of the basic list page: which dialog mode is open
//! and whether a submit just completed, plus the delete awaiting
//! confirmation.

use crate::intent::{Intent, RemovalRequest, SubmitPayload};
use crate::models::{ItemFormValues, ListItem};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    /// Carries the full item being edited
    Edit(ListItem),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogState {
    mode: DialogMode,
    done: bool,
}

impl DialogState {
    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, DialogMode::Closed)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Item targeted for edit; `None` in create mode or when closed
    pub fn current(&self) -> Option<&ListItem> {
        match &self.mode {
            DialogMode::Edit(item) => Some(item),
            _ => None,
        }
    }

    pub fn open_create(&mut self) {
        tracing::debug!(target: "dialog", "open create");
        self.mode = DialogMode::Create;
        self.done = false;
    }

    pub fn open_edit(&mut self, item: ListItem) {
        tracing::debug!(target: "dialog", "open edit {}", item.id);
        self.mode = DialogMode::Edit(item);
        self.done = false;
    }

    pub fn cancel(&mut self) {
        tracing::debug!(target: "dialog", "cancel");
        self.mode = DialogMode::Closed;
    }

    /// Build the save intent and mark the dialog done.
    ///
    /// Returns `None` when there is nothing to submit to (closed, or the
    /// completion panel is already showing).
    pub fn submit(&mut self, values: ItemFormValues) -> Option<Intent> {
        if !self.is_open() || self.done {
            return None;
        }
        let id = self.current().map(|item| item.id.clone()).unwrap_or_default();
        tracing::debug!(target: "dialog", "submit id={:?}", id);
        self.done = true;
        Some(Intent::Submit(SubmitPayload { id, values }))
    }

    /// Acknowledge the completion panel
    pub fn finish(&mut self) {
        tracing::debug!(target: "dialog", "done");
        self.done = false;
        self.mode = DialogMode::Closed;
    }
}

/// Delete awaiting the confirm dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovalState {
    pending: Option<RemovalRequest>,
}

impl RemovalState {
    pub fn pending(&self) -> Option<&RemovalRequest> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ask for confirmation; replaces any earlier unanswered request
    pub fn request(&mut self, item: &ListItem) {
        tracing::debug!(target: "dialog", "confirm delete {}", item.id);
        self.pending = Some(RemovalRequest::new(item));
    }

    /// Accept the pending request; `None` when nothing is pending
    pub fn confirm(&mut self) -> Option<Intent> {
        let request = self.pending.take()?;
        tracing::debug!(target: "dialog", "delete confirmed for {}", request.id());
        Some(request.confirm())
    }

    pub fn dismiss(&mut self) {
        self.pending = None;
    }
}

/// Fetch intent for the page's first effect run only
pub fn initial_fetch(prev: Option<()>, count: usize) -> Option<Intent> {
    prev.is_none().then_some(Intent::Fetch { count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn make_item(id: &str) -> ListItem {
        ListItem {
            id: id.to_string(),
            title: format!("Task {}", id),
            sub_description: "desc".to_string(),
            owner: "owner".to_string(),
            created_at: DateTime::<Utc>::from_timestamp_millis(0).unwrap(),
            percent: 50,
            status: Default::default(),
            logo: String::new(),
            href: String::new(),
        }
    }

    fn make_values() -> ItemFormValues {
        ItemFormValues {
            title: "New title".to_string(),
            created_at: DateTime::<Utc>::from_timestamp_millis(5_000).unwrap(),
            owner: "owner".to_string(),
            sub_description: "new description".to_string(),
        }
    }

    #[test]
    fn test_starts_closed() {
        let state = DialogState::default();
        assert!(!state.is_open());
        assert!(!state.is_done());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_open_edit_targets_item() {
        let item = make_item("7");
        let mut state = DialogState::default();
        state.open_edit(item.clone());
        assert_eq!(state.mode(), &DialogMode::Edit(item.clone()));
        assert_eq!(state.current(), Some(&item));
    }

    #[test]
    fn test_open_create_clears_target() {
        let mut state = DialogState::default();
        state.open_edit(make_item("7"));
        state.cancel();
        state.open_create();
        assert_eq!(state.mode(), &DialogMode::Create);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_cancel_from_either_mode() {
        let mut state = DialogState::default();
        state.open_create();
        state.cancel();
        assert_eq!(state.mode(), &DialogMode::Closed);

        state.open_edit(make_item("1"));
        state.cancel();
        assert_eq!(state.mode(), &DialogMode::Closed);
        assert!(!state.is_done());
    }

    #[test]
    fn test_submit_in_edit_mode_uses_target_id() {
        let mut state = DialogState::default();
        state.open_edit(make_item("42"));
        let intent = state.submit(make_values()).unwrap();
        match intent {
            Intent::Submit(payload) => {
                assert_eq!(payload.id, "42");
                assert_eq!(payload.values, make_values());
            }
            other => panic!("unexpected intent {:?}", other),
        }
        assert!(state.is_done());
        assert!(state.is_open());
    }

    #[test]
    fn test_submit_in_create_mode_uses_empty_id() {
        let mut state = DialogState::default();
        state.open_create();
        let Some(Intent::Submit(payload)) = state.submit(make_values()) else {
            panic!("expected a submit intent");
        };
        assert!(payload.is_create());
    }

    #[test]
    fn test_submit_dispatches_once() {
        let mut state = DialogState::default();
        state.open_create();
        assert!(state.submit(make_values()).is_some());
        assert!(state.submit(make_values()).is_none());

        state.finish();
        assert_eq!(state.mode(), &DialogMode::Closed);
        assert!(!state.is_done());
        assert!(state.submit(make_values()).is_none());
    }

    #[test]
    fn test_reopen_resets_done() {
        let mut state = DialogState::default();
        state.open_create();
        state.submit(make_values());
        state.cancel();
        state.open_edit(make_item("3"));
        assert!(!state.is_done());
    }

    #[test]
    fn test_confirmed_delete_dispatches_once() {
        let mut removal = RemovalState::default();
        removal.request(&make_item("42"));
        assert!(removal.is_pending());
        assert_eq!(removal.pending().map(|r| r.title()), Some("Task 42"));

        let mut dispatched = Vec::new();
        dispatched.extend(removal.confirm());
        dispatched.extend(removal.confirm());
        assert_eq!(dispatched.len(), 1);
        match &dispatched[0] {
            Intent::Remove(confirmed) => assert_eq!(confirmed.id(), "42"),
            other => panic!("unexpected intent {:?}", other),
        }
        assert!(!removal.is_pending());
    }

    #[test]
    fn test_dismissed_delete_dispatches_nothing() {
        let mut removal = RemovalState::default();
        removal.request(&make_item("42"));
        removal.dismiss();
        assert!(!removal.is_pending());
        assert_eq!(removal.confirm(), None);
    }

    #[test]
    fn test_confirm_without_request_is_noop() {
        let mut removal = RemovalState::default();
        assert_eq!(removal.confirm(), None);
    }

    #[test]
    fn test_latest_request_wins() {
        let mut removal = RemovalState::default();
        removal.request(&make_item("1"));
        removal.request(&make_item("2"));
        let Some(Intent::Remove(confirmed)) = removal.confirm() else {
            panic!("expected a remove intent");
        };
        assert_eq!(confirmed.id(), "2");
    }

    #[test]
    fn test_initial_fetch_once_per_mount() {
        let mut dispatched = Vec::new();
        let mut prev = None;
        for _ in 0..3 {
            dispatched.extend(initial_fetch(prev, 5));
            prev = Some(());
        }
        assert_eq!(dispatched, vec![Intent::Fetch { count: 5 }]);
    }
}
