//! Type definitions for the autograf client.
//!
//! Fields the server may omit are `Option`s: `None` means "not provided",
//! which is different from a zero the server actually sent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status envelope returned by most write endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    /// Numeric identifier of the affected object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Organization the object belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Object version after the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Status string, e.g. "success" or "version-mismatch".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Stable unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Relative URL of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Dashboard metadata returned next to the dashboard model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardProperties {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub can_save: Option<bool>,
    pub can_edit: Option<bool>,
    pub can_admin: Option<bool>,
    pub can_star: Option<bool>,
    pub is_starred: Option<bool>,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub expires: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub version: Option<i64>,
    pub has_acl: Option<bool>,
    pub is_folder: Option<bool>,
    pub folder_id: Option<i64>,
    pub folder_uid: Option<String>,
    pub folder_title: Option<String>,
    pub folder_url: Option<String>,
    pub provisioned: Option<bool>,
    pub provisioned_external_id: Option<String>,
}

/// A dashboard model together with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardWithMeta {
    /// The dashboard JSON, untouched.
    pub dashboard: Value,
    /// Server-side metadata.
    #[serde(default)]
    pub meta: BoardProperties,
}

/// Body for saving a dashboard through `POST /api/dashboards/db`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUpload {
    /// The dashboard JSON.
    pub dashboard: Value,
    /// Replace an existing dashboard with the same uid or title.
    pub overwrite: bool,
    /// Target folder by numeric id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    /// Target folder by uid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    /// Commit message stored in the dashboard version history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DashboardUpload {
    /// Upload `dashboard`, overwriting any existing one.
    pub fn new(dashboard: Value) -> Self {
        Self {
            dashboard,
            overwrite: true,
            folder_id: None,
            folder_uid: None,
            message: None,
        }
    }

    /// Place the dashboard in a folder.
    #[must_use]
    pub fn with_folder_uid(mut self, folder_uid: impl Into<String>) -> Self {
        self.folder_uid = Some(folder_uid.into());
        self
    }

    /// Attach a version-history message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set whether an existing dashboard may be replaced.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Kind of object a search hit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    /// A dashboard.
    #[serde(rename = "dash-db")]
    Dashboard,
    /// A folder.
    #[serde(rename = "dash-folder")]
    Folder,
}

impl SearchType {
    /// Wire name used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dash-db",
            Self::Folder => "dash-folder",
        }
    }
}

/// Filters for `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Title substring.
    pub query: Option<String>,
    /// Every listed tag must match.
    pub tags: Vec<String>,
    /// Restrict to dashboards or folders.
    pub search_type: Option<SearchType>,
    /// Restrict to these folders.
    pub folder_ids: Vec<i64>,
    /// Restrict to these dashboards.
    pub dashboard_uids: Vec<String>,
    /// Only starred dashboards.
    pub starred: Option<bool>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page number, starting at 1.
    pub page: Option<u32>,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundBoard {
    pub id: u64,
    pub uid: String,
    pub title: String,
    pub uri: Option<String>,
    pub url: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<SearchType>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_starred: bool,
    pub folder_id: Option<i64>,
    pub folder_uid: Option<String>,
    pub folder_title: Option<String>,
    pub folder_url: Option<String>,
}

/// A data source definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasource {
    /// Server-assigned id; required for updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default)]
    pub basic_auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_user: Option<String>,
    #[serde(default)]
    pub with_credentials: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_data: Option<Value>,
    /// Write-only secrets; the server never returns them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_json_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

/// A legacy alert rule as listed by `GET /api/alerts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u64,
    pub dashboard_id: Option<u64>,
    pub dashboard_uid: Option<String>,
    pub dashboard_slug: Option<String>,
    pub panel_id: Option<u64>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub new_state_date: Option<String>,
    pub eval_date: Option<String>,
    pub execution_error: Option<String>,
    pub url: Option<String>,
}

/// Filters for `GET /api/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQuery {
    pub dashboard_ids: Vec<u64>,
    pub panel_id: Option<u64>,
    /// Alert name substring.
    pub query: Option<String>,
    /// States such as "alerting", "ok", "paused"; "all" for every state.
    pub states: Vec<String>,
    pub limit: Option<u32>,
    pub folder_ids: Vec<i64>,
    pub dashboard_query: Option<String>,
    pub dashboard_tags: Vec<String>,
}

/// An organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Org {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Postal address of an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Partial update of the current organization's preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_dashboard_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_dashboard_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<String>,
}

/// Server health as reported by `GET /api/health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub commit: Option<String>,
    pub database: Option<String>,
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_message_absent_fields_stay_none() {
        let status: StatusMessage = serde_json::from_str(r#"{"id":1,"slug":"x"}"#).unwrap();
        assert_eq!(status.id, Some(1));
        assert_eq!(status.slug.as_deref(), Some("x"));
        assert_eq!(status.org_id, None);
        assert_eq!(status.message, None);
        assert_eq!(status.version, None);
        assert_eq!(status.status, None);
        assert_eq!(status.uid, None);
        assert_eq!(status.url, None);
    }

    #[test]
    fn test_status_message_zero_is_not_absent() {
        let status: StatusMessage =
            serde_json::from_str(r#"{"id":0,"orgId":0,"version":0}"#).unwrap();
        assert_eq!(status.id, Some(0));
        assert_eq!(status.org_id, Some(0));
        assert_eq!(status.version, Some(0));
    }

    #[test]
    fn test_status_message_null_and_unknown_fields() {
        let status: StatusMessage =
            serde_json::from_str(r#"{"id":null,"status":"success","folderUid":"abc"}"#).unwrap();
        assert_eq!(status.id, None);
        assert_eq!(status.status.as_deref(), Some("success"));
    }

    #[test]
    fn test_status_message_full() {
        let status: StatusMessage = serde_json::from_value(json!({
            "id": 12,
            "orgId": 2,
            "message": "ok",
            "slug": "production-overview",
            "version": 3,
            "status": "success",
            "uid": "cIBgcSjkk",
            "url": "/d/cIBgcSjkk/production-overview"
        }))
        .unwrap();
        assert_eq!(status.org_id, Some(2));
        assert_eq!(status.version, Some(3));
        assert_eq!(status.url.as_deref(), Some("/d/cIBgcSjkk/production-overview"));
    }

    #[test]
    fn test_dashboard_upload_serialization() {
        let upload = DashboardUpload::new(json!({"title": "Prod"}))
            .with_folder_uid("ops")
            .with_message("initial import");

        let value = serde_json::to_value(&upload).unwrap();
        assert_eq!(
            value,
            json!({
                "dashboard": {"title": "Prod"},
                "overwrite": true,
                "folderUid": "ops",
                "message": "initial import"
            })
        );
    }

    #[test]
    fn test_datasource_serialization_skips_absent() {
        let datasource = Datasource {
            name: "prometheus".to_string(),
            kind: "prometheus".to_string(),
            access: "proxy".to_string(),
            url: "http://prometheus:9090".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&datasource).unwrap();
        assert_eq!(value["type"], "prometheus");
        assert!(value.get("id").is_none());
        assert!(value.get("secureJsonData").is_none());
        assert_eq!(value["isDefault"], false);
    }

    #[test]
    fn test_found_board_deserialization() {
        let board: FoundBoard = serde_json::from_value(json!({
            "id": 163,
            "uid": "000000163",
            "title": "Folder",
            "url": "/dashboards/f/000000163/folder",
            "type": "dash-folder",
            "tags": [],
            "isStarred": false
        }))
        .unwrap();
        assert_eq!(board.kind, Some(SearchType::Folder));
        assert_eq!(board.folder_id, None);
    }
}
