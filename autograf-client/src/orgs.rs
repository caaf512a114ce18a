//! Current-organization and health operations.
//!
//! The "current" organization is the user's active one, or the one named by
//! `X-Grafana-Org-Id` when the client sets it.

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Result;
use crate::types::{HealthStatus, Org, OrgPreferences, StatusMessage};

impl Client {
    /// Fetch the current organization.
    pub async fn get_actual_org(&self, ctx: &RequestContext) -> Result<Org> {
        let response = self.get(ctx, "api/org", None).await?;
        self.handle_response(response)
    }

    /// Update the current organization's name and address.
    pub async fn update_actual_org(
        &self,
        ctx: &RequestContext,
        org: &Org,
    ) -> Result<StatusMessage> {
        let body = serde_json::to_vec(org)?;
        let response = self.put(ctx, "api/org", None, body).await?;
        self.handle_response(response)
    }

    /// Change only the given preferences of the current organization.
    pub async fn patch_actual_org_preferences(
        &self,
        ctx: &RequestContext,
        preferences: &OrgPreferences,
    ) -> Result<StatusMessage> {
        let body = serde_json::to_vec(preferences)?;
        let response = self.patch(ctx, "api/org/preferences", None, body).await?;
        self.handle_response(response)
    }

    /// Report server health.
    ///
    /// The server answers 503 when its database is unreachable; that surfaces
    /// as [`ClientError::Api`](crate::ClientError::Api).
    pub async fn health(&self, ctx: &RequestContext) -> Result<HealthStatus> {
        let response = self.get(ctx, "api/health", None).await?;
        self.handle_response(response)
    }
}
