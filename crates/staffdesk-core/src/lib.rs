// staffdesk-core: Reactive stores and routing over the staffdesk API client
//
// The CLI (and any other front end) depends on this crate. It owns the
// per-resource stores, the route table, and the runtime client config.

pub mod config;
pub mod console;
pub mod error;
pub mod route;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, TlsVerification};
pub use console::{Console, DashboardSummary};
pub use error::{CoreError, ErrorKind};
pub use route::{ROUTES, Route, RouteEntry, RouteName, UnknownRoute, ViewId};
pub use store::{Action, DepartmentStore, ResourceStore, StaffStore, StoreEntity};
pub use stream::{EntityStream, EntityWatchStream};

// ── Resource types (canonical home is staffdesk-api) ────────────────
pub use staffdesk_api::{
    Department, DepartmentRequest, EnvelopePolicy, Id, Identified, ResourceApi, Staff,
    StaffDirectory, StaffRequest,
};
