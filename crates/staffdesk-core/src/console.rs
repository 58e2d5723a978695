// ── Console ──
//
// Explicitly constructed entry point: owns the HTTP client and one store
// per resource. Cheaply cloneable; clones share the same stores.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use staffdesk_api::{ApiClient, DepartmentApi, StaffApi};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::store::{DepartmentStore, StaffStore};

/// Client plus stores for one backend.
#[derive(Clone)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

struct ConsoleInner {
    config: ClientConfig,
    client: Arc<ApiClient>,
    departments: DepartmentStore,
    staff: StaffStore,
}

impl Console {
    /// Build the HTTP client from `config` and wire up empty stores.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let client = ApiClient::new(config.api_url.as_str(), &config.transport())?;
        debug!(base_url = %client.base_url(), "console ready");
        Ok(Self::with_client(config, client))
    }

    /// Wire stores over an already-built client.
    pub fn with_client(config: ClientConfig, client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            inner: Arc::new(ConsoleInner {
                departments: DepartmentStore::new(DepartmentApi::new(Arc::clone(&client))),
                staff: StaffStore::new(StaffApi::new(Arc::clone(&client))),
                config,
                client,
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.inner.client
    }

    pub fn departments(&self) -> &DepartmentStore {
        &self.inner.departments
    }

    pub fn staff(&self) -> &StaffStore {
        &self.inner.staff
    }

    /// Landing view: refresh both collections concurrently and summarize.
    ///
    /// Fetch failures land in the stores' error fields and are reported in
    /// the summary; the counts then reflect whatever the stores held before.
    pub async fn dashboard(&self) -> DashboardSummary {
        tokio::join!(self.departments().fetch_all(), self.staff().fetch_all());
        DashboardSummary::from_stores(self.departments(), self.staff())
    }
}

/// Totals shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub department_total: usize,
    pub active_departments: usize,
    pub staff_total: usize,
    pub active_staff: usize,
    /// Staff without an embedded department.
    pub unassigned_staff: usize,
    /// Headcount per department name, alphabetical.
    pub staff_per_department: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl DashboardSummary {
    pub fn from_stores(departments: &DepartmentStore, staff: &StaffStore) -> Self {
        let depts = departments.collection();
        let people = staff.collection();

        let mut staff_per_department = BTreeMap::new();
        for name in people.iter().filter_map(|s| s.department_name()) {
            *staff_per_department.entry(name.to_owned()).or_insert(0) += 1;
        }

        let fetched_at = match (departments.last_fetched(), staff.last_fetched()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        Self {
            department_total: depts.len(),
            active_departments: depts.iter().filter(|d| d.is_active).count(),
            staff_total: people.len(),
            active_staff: people.iter().filter(|s| s.is_active).count(),
            unassigned_staff: people.iter().filter(|s| s.department.is_none()).count(),
            staff_per_department,
            departments_error: departments.error(),
            staff_error: staff.error(),
            fetched_at,
        }
    }

    /// Whether either collection failed to refresh.
    pub fn is_partial(&self) -> bool {
        self.departments_error.is_some() || self.staff_error.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn envelope(data: serde_json::Value) -> serde_json::Value {
        json!({ "success": true, "message": "ok", "data": data, "timestamp": "2024-05-01T10:00:00" })
    }

    fn console_for(server: &MockServer) -> Console {
        let url = Url::parse(&format!("{}/api", server.uri())).unwrap();
        Console::new(ClientConfig::new(url)).unwrap()
    }

    #[tokio::test]
    async fn dashboard_summarizes_both_collections() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/departments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
                { "id": 1, "code": "HQ", "name": "Headquarters", "level": 1, "isActive": true },
                { "id": 2, "code": "OLD", "name": "Legacy", "level": 1, "isActive": false }
            ]))))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/staff"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
                { "id": 1, "staffNo": "S-001", "name": "Ana", "isActive": true,
                  "department": { "id": 1, "code": "HQ", "name": "Headquarters", "level": 1, "isActive": true } },
                { "id": 2, "staffNo": "S-002", "name": "Bo", "isActive": true,
                  "department": { "id": 1, "code": "HQ", "name": "Headquarters", "level": 1, "isActive": true } },
                { "id": 3, "staffNo": "S-003", "name": "Cy", "isActive": false }
            ]))))
            .mount(&server)
            .await;

        let console = console_for(&server);
        let summary = console.dashboard().await;

        assert_eq!(summary.department_total, 2);
        assert_eq!(summary.active_departments, 1);
        assert_eq!(summary.staff_total, 3);
        assert_eq!(summary.active_staff, 2);
        assert_eq!(summary.unassigned_staff, 1);
        assert_eq!(
            summary.staff_per_department,
            BTreeMap::from([("Headquarters".to_owned(), 2)])
        );
        assert!(!summary.is_partial());
        assert!(summary.fetched_at.is_some());
    }

    #[tokio::test]
    async fn dashboard_reports_store_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/departments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/staff"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let console = console_for(&server);
        let summary = console.dashboard().await;

        assert!(summary.is_partial());
        assert_eq!(summary.staff_error.as_deref(), Some("Failed to fetch staff list"));
        assert_eq!(summary.departments_error, None);
        assert_eq!(summary.staff_total, 0);
    }

    #[tokio::test]
    async fn create_then_fetch_by_code_round_trips_through_the_store() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/departments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(
                { "id": 42, "code": "ENG", "name": "Engineering", "level": 1, "isActive": true }
            ))))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/departments/code/ENG"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(
                { "id": 42, "code": "ENG", "name": "Engineering", "level": 1, "isActive": true }
            ))))
            .mount(&server)
            .await;

        let console = console_for(&server);
        let store = console.departments();

        let created = store
            .create(&staffdesk_api::DepartmentRequest::new("ENG", "Engineering"))
            .await
            .unwrap();
        assert_eq!(created.id, Some(42));
        assert_eq!(store.collection().last(), Some(&created));

        store.fetch_by_key("ENG").await;
        let current = store.current().unwrap();
        assert_eq!(current.code, "ENG");
        assert_eq!(current.name, "Engineering");
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn clones_share_stores() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/staff/department/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
                { "id": 9, "staffNo": "S-009", "name": "Dee", "isActive": true }
            ]))))
            .mount(&server)
            .await;

        let console = console_for(&server);
        let other = console.clone();
        other.staff().fetch_by_department(7).await;

        assert_eq!(console.staff().collection().len(), 1);
        assert_eq!(console.config().api_url.as_str(), format!("{}/api", server.uri()));
    }
}
