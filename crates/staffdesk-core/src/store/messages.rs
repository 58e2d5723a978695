// ── Store failure messages ──
//
// Fixed, human-readable messages a store exposes when an action fails.
// The underlying error only goes to the log.

use staffdesk_api::{Department, Identified, Staff};
use strum::{Display, IntoStaticStr};

/// Store actions, used for log fields and message lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    FetchAll,
    FetchById,
    FetchByKey,
    Search,
    FetchByDepartment,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Write actions re-raise their failure after recording it.
    pub fn is_write(self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }
}

/// One message per generic store action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureMessages {
    pub fetch_all: &'static str,
    pub fetch_by_id: &'static str,
    pub fetch_by_key: &'static str,
    pub search: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// An entity a [`ResourceStore`](super::ResourceStore) can hold.
pub trait StoreEntity: Identified + Clone + Send + Sync + 'static {
    /// Short resource label for logs ("department", "staff").
    const KIND: &'static str;
    const MESSAGES: FailureMessages;
}

impl StoreEntity for Department {
    const KIND: &'static str = "department";
    const MESSAGES: FailureMessages = FailureMessages {
        fetch_all: "Failed to fetch departments",
        fetch_by_id: "Failed to fetch department details",
        fetch_by_key: "Failed to fetch department by code",
        search: "Failed to search departments",
        create: "Failed to create department",
        update: "Failed to update department",
        delete: "Failed to delete department",
    };
}

impl StoreEntity for Staff {
    const KIND: &'static str = "staff";
    const MESSAGES: FailureMessages = FailureMessages {
        fetch_all: "Failed to fetch staff list",
        fetch_by_id: "Failed to fetch staff details",
        fetch_by_key: "Failed to fetch staff by staff number",
        search: "Failed to search staff",
        create: "Failed to create staff",
        update: "Failed to update staff",
        delete: "Failed to delete staff",
    };
}

/// Staff-only action message.
pub const FETCH_BY_DEPARTMENT_FAILED: &str = "Failed to fetch department staff";

impl FailureMessages {
    /// Message for a generic action; `None` for resource-specific actions.
    pub fn for_action(&self, action: Action) -> Option<&'static str> {
        match action {
            Action::FetchAll => Some(self.fetch_all),
            Action::FetchById => Some(self.fetch_by_id),
            Action::FetchByKey => Some(self.fetch_by_key),
            Action::Search => Some(self.search),
            Action::Create => Some(self.create),
            Action::Update => Some(self.update),
            Action::Delete => Some(self.delete),
            Action::FetchByDepartment => None,
        }
    }
}
