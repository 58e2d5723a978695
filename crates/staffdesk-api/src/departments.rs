// Department endpoints
//
// `/departments` collection, lookup by id or business code, name search,
// and full-replacement writes.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Department, DepartmentRequest, Id};

const DEPARTMENTS: &str = "departments";

impl ApiClient {
    /// `GET /departments`
    pub async fn list_departments(&self) -> Result<Vec<Department>, Error> {
        self.get(&[DEPARTMENTS]).await
    }

    /// `GET /departments/{id}`
    pub async fn get_department(&self, id: Id) -> Result<Department, Error> {
        self.get(&[DEPARTMENTS, &id.to_string()]).await
    }

    /// `GET /departments/code/{code}`
    pub async fn get_department_by_code(&self, code: &str) -> Result<Department, Error> {
        self.get(&[DEPARTMENTS, "code", code]).await
    }

    /// `GET /departments/search?name=`
    ///
    /// Matching semantics are entirely up to the backend.
    pub async fn search_departments(&self, name: &str) -> Result<Vec<Department>, Error> {
        self.get_with_params(&[DEPARTMENTS, "search"], &[("name", name)])
            .await
    }

    /// `POST /departments`
    pub async fn create_department(
        &self,
        request: &DepartmentRequest,
    ) -> Result<Department, Error> {
        debug!(code = %request.code, "creating department");
        self.post(&[DEPARTMENTS], request).await
    }

    /// `PUT /departments/{id}` (full replacement)
    pub async fn update_department(
        &self,
        id: Id,
        request: &DepartmentRequest,
    ) -> Result<Department, Error> {
        debug!(id, "updating department");
        self.put(&[DEPARTMENTS, &id.to_string()], request).await
    }

    /// `DELETE /departments/{id}`
    pub async fn delete_department(&self, id: Id) -> Result<(), Error> {
        debug!(id, "deleting department");
        self.delete(&[DEPARTMENTS, &id.to_string()]).await
    }
}
