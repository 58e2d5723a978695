// staffdesk-api: Async Rust client for the staff/department REST API

pub mod client;
pub mod departments;
pub mod envelope;
pub mod error;
pub mod resource;
pub mod staff;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use envelope::{ApiResponse, EnvelopePolicy};
pub use error::Error;
pub use resource::{DepartmentApi, ResourceApi, StaffApi, StaffDirectory};
pub use transport::{TlsMode, TransportConfig};
pub use types::{Department, DepartmentRequest, Id, Identified, Staff, StaffRequest};
