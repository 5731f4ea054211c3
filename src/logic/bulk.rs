//! Multi-selection over the visible list and the simulated batch actions.
//!
//! Batch actions never touch the underlying collections: they report what
//! would have been affected, clear the selection, and leave the data as is.

use serde::Serialize;

use crate::model::{Id, Record, RecordStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BulkAction {
    Delete,
    StatusChange { status: RecordStatus },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkOutcome {
    pub action: BulkAction,
    pub affected: Vec<Id>,
}

impl BulkOutcome {
    pub fn message(&self) -> String {
        match &self.action {
            BulkAction::Delete => format!("{} items deleted successfully", self.affected.len()),
            BulkAction::StatusChange { .. } => {
                format!("Status updated for {} items", self.affected.len())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelection {
    enabled: bool,
    selected: Vec<Id>,
}

impl BulkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Leaving bulk mode keeps the current selection
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn selected(&self) -> &[Id] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn set_selected(&mut self, id: &str, selected: bool) {
        if selected {
            if !self.is_selected(id) {
                self.selected.push(id.to_string());
            }
        } else {
            self.selected.retain(|s| s != id);
        }
    }

    /// Select exactly the currently visible records, or clear
    pub fn select_all(&mut self, visible: &[Record], selected: bool) {
        self.selected = if selected {
            visible.iter().map(|record| record.id().clone()).collect()
        } else {
            Vec::new()
        };
    }

    /// The "select all" checkbox state
    pub fn all_selected(&self, visible: &[Record]) -> bool {
        !visible.is_empty() && self.selected.len() == visible.len()
    }

    /// Drop ids that are no longer rendered
    pub fn retain_visible(&mut self, visible: &[Record]) {
        self.selected
            .retain(|id| visible.iter().any(|record| record.id() == id));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Simulated delete; also leaves bulk mode
    pub fn delete(&mut self) -> Option<BulkOutcome> {
        let outcome = self.take(BulkAction::Delete)?;
        self.enabled = false;
        Some(outcome)
    }

    /// Simulated status change; bulk mode stays on
    pub fn change_status(&mut self, status: RecordStatus) -> Option<BulkOutcome> {
        self.take(BulkAction::StatusChange { status })
    }

    fn take(&mut self, action: BulkAction) -> Option<BulkOutcome> {
        if self.selected.is_empty() {
            return None;
        }
        Some(BulkOutcome {
            action,
            affected: std::mem::take(&mut self.selected),
        })
    }
}
