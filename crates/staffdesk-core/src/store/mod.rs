// ── Reactive resource stores ──
//
// One store per resource, explicitly constructed and passed around.

mod messages;
mod resource_store;


use staffdesk_api::{DepartmentApi, StaffApi};

pub use messages::{Action, FETCH_BY_DEPARTMENT_FAILED, FailureMessages, StoreEntity};
pub use resource_store::ResourceStore;

/// Department store backed by the HTTP client.
pub type DepartmentStore = ResourceStore<DepartmentApi>;

/// Staff store backed by the HTTP client.
pub type StaffStore = ResourceStore<StaffApi>;
