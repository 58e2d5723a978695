// Resource types
//
// Read models (`Department`, `Staff`) and their full-replacement request
// bodies. Wire names are camelCase. Timestamps and dates are opaque strings
// assigned or interpreted by the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Numeric primary key assigned by the backend.
pub type Id = i64;

/// Anything with an optional backend-assigned identity.
pub trait Identified {
    /// `None` until the entity has been persisted.
    fn id(&self) -> Option<Id>;
}

/// Scalar fields some backends send as `null`; read those as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Department ───────────────────────────────────────────────────────

/// An organisational unit. `parent_id` forms a tree; `level` is a depth
/// hint supplied by the client and never derived from `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Department {
    /// Full-replacement request carrying this department's current values.
    pub fn to_request(&self) -> DepartmentRequest {
        DepartmentRequest {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            parent_id: self.parent_id,
            level: Some(self.level),
            is_active: Some(self.is_active),
        }
    }
}

impl Identified for Department {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

/// Body for `POST /departments` and `PUT /departments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl DepartmentRequest {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

// ── Staff ────────────────────────────────────────────────────────────

/// A staff member as returned by the read endpoints.
///
/// `department` is a denormalized snapshot attached by the backend. Writes
/// go through [`StaffRequest::department_id`] instead; the two are never
/// reconciled on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub staff_no: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Staff {
    /// Full-replacement request carrying this staff member's current values.
    ///
    /// The embedded department's id becomes `department_id`.
    pub fn to_request(&self) -> StaffRequest {
        StaffRequest {
            staff_no: self.staff_no.clone(),
            name: self.name.clone(),
            gender: self.gender.clone(),
            birth_date: self.birth_date.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            id_card: self.id_card.clone(),
            department_id: self.department.as_ref().and_then(|d| d.id),
            position: self.position.clone(),
            hire_date: self.hire_date.clone(),
            status: self.status.clone(),
            address: self.address.clone(),
            is_active: Some(self.is_active),
        }
    }

    /// Name of the embedded department, if the backend attached one.
    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }
}

impl Identified for Staff {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

/// Body for `POST /staff` and `PUT /staff/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRequest {
    pub staff_no: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl StaffRequest {
    pub fn new(staff_no: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            staff_no: staff_no.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn department_wire_names_are_camel_case() {
        let dept: Department = serde_json::from_value(json!({
            "id": 3,
            "code": "ENG",
            "name": "Engineering",
            "parentId": 1,
            "level": 2,
            "isActive": true,
            "createdAt": "2024-01-01T09:00:00"
        }))
        .unwrap();

        assert_eq!(dept.id, Some(3));
        assert_eq!(dept.parent_id, Some(1));
        assert_eq!(dept.level, 2);
        assert!(dept.is_active);
        assert_eq!(dept.created_at.as_deref(), Some("2024-01-01T09:00:00"));
        assert_eq!(dept.updated_at, None);
    }

    #[test]
    fn null_scalars_read_as_defaults() {
        let dept: Department = serde_json::from_value(json!({
            "id": 7,
            "code": "TMP",
            "name": "Temporary",
            "description": null,
            "parentId": null,
            "level": null,
            "isActive": null
        }))
        .unwrap();
        assert_eq!(dept.level, 0);
        assert!(!dept.is_active);
        assert_eq!(dept.parent_id, None);

        let staff: Staff = serde_json::from_value(json!({
            "staffNo": "S-010",
            "name": "Kim",
            "department": null,
            "isActive": null
        }))
        .unwrap();
        assert!(!staff.is_active);
        assert_eq!(staff.department, None);
    }

    #[test]
    fn request_omits_unset_optionals() {
        let body = serde_json::to_value(DepartmentRequest::new("ENG", "Engineering")).unwrap();
        assert_eq!(body, json!({ "code": "ENG", "name": "Engineering" }));
    }

    #[test]
    fn staff_request_takes_department_id_from_embedded_department() {
        let staff: Staff = serde_json::from_value(json!({
            "id": 5,
            "staffNo": "S-005",
            "name": "Li Wei",
            "department": { "id": 9, "code": "OPS", "name": "Operations", "level": 1, "isActive": true },
            "isActive": true
        }))
        .unwrap();

        let request = staff.to_request();
        assert_eq!(request.department_id, Some(9));
        assert_eq!(request.staff_no, "S-005");
        assert_eq!(request.is_active, Some(true));
        assert_eq!(staff.department_name(), Some("Operations"));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["departmentId"], json!(9));
        assert!(body.get("department").is_none());
    }

    #[test]
    fn department_to_request_preserves_level_independently_of_parent() {
        let dept = Department {
            id: Some(4),
            code: "QA".into(),
            name: "Quality".into(),
            description: None,
            parent_id: None,
            level: 3,
            is_active: false,
            created_at: None,
            updated_at: None,
        };
        let request = dept.to_request();
        assert_eq!(request.level, Some(3));
        assert_eq!(request.parent_id, None);
        assert_eq!(request.is_active, Some(false));
    }
}
