//! Legacy alert rule operations.

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Result;
use crate::params::QueryParams;
use crate::types::{Alert, AlertQuery, StatusMessage};
use serde::Serialize;

/// Body for pausing or resuming an alert.
#[derive(Debug, Serialize)]
struct PauseRequest {
    paused: bool,
}

impl AlertQuery {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();

        for id in &self.dashboard_ids {
            params.add("dashboardId", id);
        }
        params.add_opt("panelId", self.panel_id);
        params.add_opt("query", self.query.as_deref());
        for state in &self.states {
            params.add("state", state);
        }
        params.add_opt("limit", self.limit);
        for id in &self.folder_ids {
            params.add("folderId", id);
        }
        params.add_opt("dashboardQuery", self.dashboard_query.as_deref());
        for tag in &self.dashboard_tags {
            params.add("dashboardTag", tag);
        }

        params
    }
}

impl Client {
    /// List alert rules matching `query`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use autograf_client::{AlertQuery, Client, RequestContext, Transport};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("http://localhost:3000", "api-key", Transport::default())?;
    /// let query = AlertQuery {
    ///     states: vec!["alerting".to_string()],
    ///     ..Default::default()
    /// };
    /// for alert in client.get_alerts(&RequestContext::background(), &query).await? {
    ///     println!("{} {:?}", alert.id, alert.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_alerts(&self, ctx: &RequestContext, query: &AlertQuery) -> Result<Vec<Alert>> {
        let params = query.to_query();
        let response = self.get(ctx, "api/alerts", Some(&params)).await?;
        self.handle_response(response)
    }

    /// Pause (`paused = true`) or resume an alert rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert does not exist or the request fails.
    pub async fn pause_alert(
        &self,
        ctx: &RequestContext,
        id: u64,
        paused: bool,
    ) -> Result<StatusMessage> {
        let path = format!("api/alerts/{}/pause", id);
        let body = serde_json::to_vec(&PauseRequest { paused })?;
        let response = self.post(ctx, &path, None, body).await?;
        self.handle_response(response)
    }
}
