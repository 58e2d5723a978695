// Staff endpoints
//
// Same shape as departments, addressable by `staffNo` as well as id, plus a
// listing filtered by department.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Id, Staff, StaffRequest};

const STAFF: &str = "staff";

impl ApiClient {
    /// `GET /staff`
    pub async fn list_staff(&self) -> Result<Vec<Staff>, Error> {
        self.get(&[STAFF]).await
    }

    /// `GET /staff/{id}`
    pub async fn get_staff(&self, id: Id) -> Result<Staff, Error> {
        self.get(&[STAFF, &id.to_string()]).await
    }

    /// `GET /staff/staffno/{staffNo}`
    pub async fn get_staff_by_staff_no(&self, staff_no: &str) -> Result<Staff, Error> {
        self.get(&[STAFF, "staffno", staff_no]).await
    }

    /// `GET /staff/department/{departmentId}`
    pub async fn list_staff_by_department(&self, department_id: Id) -> Result<Vec<Staff>, Error> {
        self.get(&[STAFF, "department", &department_id.to_string()])
            .await
    }

    /// `GET /staff/search?name=`
    pub async fn search_staff(&self, name: &str) -> Result<Vec<Staff>, Error> {
        self.get_with_params(&[STAFF, "search"], &[("name", name)])
            .await
    }

    /// `POST /staff`
    pub async fn create_staff(&self, request: &StaffRequest) -> Result<Staff, Error> {
        debug!(staff_no = %request.staff_no, "creating staff");
        self.post(&[STAFF], request).await
    }

    /// `PUT /staff/{id}` (full replacement)
    pub async fn update_staff(&self, id: Id, request: &StaffRequest) -> Result<Staff, Error> {
        debug!(id, "updating staff");
        self.put(&[STAFF, &id.to_string()], request).await
    }

    /// `DELETE /staff/{id}`
    pub async fn delete_staff(&self, id: Id) -> Result<(), Error> {
        debug!(id, "deleting staff");
        self.delete(&[STAFF, &id.to_string()]).await
    }
}
