// Resource seam
//
// `ResourceApi` abstracts the seven operations every resource exposes so
// state containers can be written once and driven by either the real HTTP
// client or an in-memory double.

use std::future::Future;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Department, DepartmentRequest, Id, Identified, Staff, StaffRequest};

/// The CRUD surface shared by every resource.
///
/// Implementations are pure pass-throughs: no retries, no caching, no
/// de-duplication. Failures propagate unchanged.
pub trait ResourceApi: Send + Sync + 'static {
    type Entity: Identified + Clone + Send + Sync + 'static;
    type Request: Send + Sync;

    fn list_all(&self) -> impl Future<Output = Result<Vec<Self::Entity>, Error>> + Send;

    fn get_by_id(&self, id: Id) -> impl Future<Output = Result<Self::Entity, Error>> + Send;

    /// Lookup by business key (`code` for departments, `staffNo` for staff).
    fn get_by_key(&self, key: &str) -> impl Future<Output = Result<Self::Entity, Error>> + Send;

    fn search(&self, name: &str) -> impl Future<Output = Result<Vec<Self::Entity>, Error>> + Send;

    fn create(
        &self,
        request: &Self::Request,
    ) -> impl Future<Output = Result<Self::Entity, Error>> + Send;

    fn update(
        &self,
        id: Id,
        request: &Self::Request,
    ) -> impl Future<Output = Result<Self::Entity, Error>> + Send;

    fn remove(&self, id: Id) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Staff-only listing filtered by the owning department.
pub trait StaffDirectory: ResourceApi<Entity = Staff> {
    fn by_department(
        &self,
        department_id: Id,
    ) -> impl Future<Output = Result<Vec<Staff>, Error>> + Send;
}

// ── Departments ──────────────────────────────────────────────────────

/// Department endpoints behind the [`ResourceApi`] seam.
#[derive(Debug, Clone)]
pub struct DepartmentApi {
    client: Arc<ApiClient>,
}

impl DepartmentApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ResourceApi for DepartmentApi {
    type Entity = Department;
    type Request = DepartmentRequest;

    async fn list_all(&self) -> Result<Vec<Department>, Error> {
        self.client.list_departments().await
    }

    async fn get_by_id(&self, id: Id) -> Result<Department, Error> {
        self.client.get_department(id).await
    }

    async fn get_by_key(&self, key: &str) -> Result<Department, Error> {
        self.client.get_department_by_code(key).await
    }

    async fn search(&self, name: &str) -> Result<Vec<Department>, Error> {
        self.client.search_departments(name).await
    }

    async fn create(&self, request: &DepartmentRequest) -> Result<Department, Error> {
        self.client.create_department(request).await
    }

    async fn update(&self, id: Id, request: &DepartmentRequest) -> Result<Department, Error> {
        self.client.update_department(id, request).await
    }

    async fn remove(&self, id: Id) -> Result<(), Error> {
        self.client.delete_department(id).await
    }
}

// ── Staff ────────────────────────────────────────────────────────────

/// Staff endpoints behind the [`ResourceApi`] seam.
#[derive(Debug, Clone)]
pub struct StaffApi {
    client: Arc<ApiClient>,
}

impl StaffApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ResourceApi for StaffApi {
    type Entity = Staff;
    type Request = StaffRequest;

    async fn list_all(&self) -> Result<Vec<Staff>, Error> {
        self.client.list_staff().await
    }

    async fn get_by_id(&self, id: Id) -> Result<Staff, Error> {
        self.client.get_staff(id).await
    }

    async fn get_by_key(&self, key: &str) -> Result<Staff, Error> {
        self.client.get_staff_by_staff_no(key).await
    }

    async fn search(&self, name: &str) -> Result<Vec<Staff>, Error> {
        self.client.search_staff(name).await
    }

    async fn create(&self, request: &StaffRequest) -> Result<Staff, Error> {
        self.client.create_staff(request).await
    }

    async fn update(&self, id: Id, request: &StaffRequest) -> Result<Staff, Error> {
        self.client.update_staff(id, request).await
    }

    async fn remove(&self, id: Id) -> Result<(), Error> {
        self.client.delete_staff(id).await
    }
}

impl StaffDirectory for StaffApi {
    async fn by_department(&self, department_id: Id) -> Result<Vec<Staff>, Error> {
        self.client.list_staff_by_department(department_id).await
    }
}
