//! Dashboard operations.

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::{ClientError, Result};
use crate::params::QueryParams;
use crate::types::{
    BoardProperties, DashboardUpload, DashboardWithMeta, FoundBoard, SearchParams, StatusMessage,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};

/// Dashboard response with the model left unparsed.
#[derive(Debug, Deserialize)]
struct RawDashboardResponse {
    dashboard: Box<RawValue>,
    #[serde(default)]
    meta: BoardProperties,
}

impl SearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();

        params.add_opt("query", self.query.as_deref());
        for tag in &self.tags {
            params.add("tag", tag);
        }
        params.add_opt("type", self.search_type.map(|t| t.as_str()));
        for folder_id in &self.folder_ids {
            params.add("folderIds", folder_id);
        }
        for uid in &self.dashboard_uids {
            params.add("dashboardUIDs", uid);
        }
        params.add_opt("starred", self.starred);
        params.add_opt("limit", self.limit);
        params.add_opt("page", self.page);

        params
    }
}

fn dashboard_path(uid: &str) -> Result<String> {
    if matches!(uid, "" | "." | "..") || uid.contains('/') {
        return Err(ClientError::InvalidArgument(format!(
            "invalid dashboard uid: {:?}",
            uid
        )));
    }
    Ok(format!("api/dashboards/uid/{}", uid))
}

impl Client {
    /// Import an already serialized dashboard.
    ///
    /// The bytes are not validated against any dashboard schema. They must be a
    /// JSON object; its `id` is set to null so the server matches on uid/title,
    /// and it is posted to `api/dashboards/db` as
    /// `{"dashboard": <board>, "overwrite": true}`, replacing any dashboard with
    /// the same uid or title. Keys keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if the bytes are not a JSON
    /// object, and [`ClientError::Api`] if the server rejects the dashboard.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use autograf_client::{Client, RequestContext, Transport};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("http://localhost:3000", "api-key", Transport::default())?;
    /// let raw = std::fs::read("node-exporter.json")?;
    /// let status = client.set_raw_dashboard(&RequestContext::background(), &raw).await?;
    /// println!("{:?} -> {:?}", status.slug, status.url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_raw_dashboard(
        &self,
        ctx: &RequestContext,
        raw: &[u8],
    ) -> Result<StatusMessage> {
        let value = serde_json::from_slice::<Value>(raw).map_err(|e| {
            ClientError::InvalidArgument(format!("dashboard is not valid JSON: {}", e))
        })?;
        let mut board: Map<String, Value> = match value {
            Value::Object(board) => board,
            other => {
                return Err(ClientError::InvalidArgument(format!(
                    "dashboard must be a JSON object, got {}",
                    json_kind(&other)
                )));
            }
        };
        board.insert("id".to_string(), Value::Null);

        let upload = DashboardUpload::new(Value::Object(board));
        self.set_dashboard(ctx, &upload).await
    }

    /// Save a dashboard model.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the dashboard.
    pub async fn set_dashboard(
        &self,
        ctx: &RequestContext,
        upload: &DashboardUpload,
    ) -> Result<StatusMessage> {
        let body = serde_json::to_vec(upload)?;
        let response = self.post(ctx, "api/dashboards/db", None, body).await?;
        self.handle_response(response)
    }

    /// Fetch a dashboard by uid, leaving the model as raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 if no such dashboard exists.
    pub async fn get_raw_dashboard_by_uid(
        &self,
        ctx: &RequestContext,
        uid: &str,
    ) -> Result<(Bytes, BoardProperties)> {
        let path = dashboard_path(uid)?;
        let response = self.get(ctx, &path, None).await?;
        let raw: RawDashboardResponse = self.handle_response(response)?;

        Ok((Bytes::copy_from_slice(raw.dashboard.get().as_bytes()), raw.meta))
    }

    /// Fetch a dashboard by uid.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 if no such dashboard exists.
    pub async fn get_dashboard_by_uid(
        &self,
        ctx: &RequestContext,
        uid: &str,
    ) -> Result<DashboardWithMeta> {
        let path = dashboard_path(uid)?;
        let response = self.get(ctx, &path, None).await?;
        self.handle_response(response)
    }

    /// Delete a dashboard by uid.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 if no such dashboard exists.
    pub async fn delete_dashboard_by_uid(
        &self,
        ctx: &RequestContext,
        uid: &str,
    ) -> Result<StatusMessage> {
        let path = dashboard_path(uid)?;
        let response = self.delete(ctx, &path).await?;
        self.handle_response(response)
    }

    /// Search dashboards and folders.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use autograf_client::{Client, RequestContext, SearchParams, Transport};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("http://localhost:3000", "api-key", Transport::default())?;
    /// let params = SearchParams {
    ///     tags: vec!["prod".to_string()],
    ///     ..Default::default()
    /// };
    /// for board in client.search(&RequestContext::background(), &params).await? {
    ///     println!("{} {}", board.uid, board.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(
        &self,
        ctx: &RequestContext,
        params: &SearchParams,
    ) -> Result<Vec<FoundBoard>> {
        let query = params.to_query();
        let response = self.get(ctx, "api/search", Some(&query)).await?;
        self.handle_response(response)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
