//! Data source operations.

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::{ClientError, Result};
use crate::types::{Datasource, StatusMessage};

/// Raw path of a name lookup, with the name as one escaped segment.
fn datasource_name_path(name: &str) -> Result<String> {
    if matches!(name, "" | "." | "..") {
        return Err(ClientError::InvalidArgument(format!(
            "invalid data source name: {:?}",
            name
        )));
    }
    Ok(format!("api/datasources/name/{}", urlencoding::encode(name)))
}

impl Client {
    /// List every data source of the current organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_all_datasources(&self, ctx: &RequestContext) -> Result<Vec<Datasource>> {
        let response = self.get(ctx, "api/datasources", None).await?;
        self.handle_response(response)
    }

    /// Fetch a data source by numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 if it does not exist.
    pub async fn get_datasource(&self, ctx: &RequestContext, id: u64) -> Result<Datasource> {
        let path = format!("api/datasources/{}", id);
        let response = self.get(ctx, &path, None).await?;
        self.handle_response(response)
    }

    /// Fetch a data source by name.
    ///
    /// Names may contain `/`, spaces or other reserved characters; they are
    /// sent percent-encoded as a single path segment.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use autograf_client::{Client, RequestContext, Transport};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("http://localhost:3000", "api-key", Transport::default())?;
    /// let ds = client
    ///     .get_datasource_by_name(&RequestContext::background(), "team-a/prometheus")
    ///     .await?;
    /// println!("{} -> {}", ds.name, ds.url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_datasource_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Datasource> {
        let raw_path = datasource_name_path(name)?;
        let response = self.get_with_raw_path(ctx, &raw_path, None).await?;
        self.handle_response(response)
    }

    /// Create a data source.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 409 if the name is taken.
    pub async fn create_datasource(
        &self,
        ctx: &RequestContext,
        datasource: &Datasource,
    ) -> Result<StatusMessage> {
        let body = serde_json::to_vec(datasource)?;
        let response = self.post(ctx, "api/datasources", None, body).await?;
        self.handle_response(response)
    }

    /// Update a data source in place. `datasource.id` selects the target.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] without sending anything when
    /// `datasource.id` is `None`.
    pub async fn update_datasource(
        &self,
        ctx: &RequestContext,
        datasource: &Datasource,
    ) -> Result<StatusMessage> {
        let id = datasource.id.ok_or_else(|| {
            ClientError::InvalidArgument(format!(
                "data source {:?} has no id to update",
                datasource.name
            ))
        })?;

        let path = format!("api/datasources/{}", id);
        let body = serde_json::to_vec(datasource)?;
        let response = self.put(ctx, &path, None, body).await?;
        self.handle_response(response)
    }

    /// Delete a data source by numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 if it does not exist.
    pub async fn delete_datasource(&self, ctx: &RequestContext, id: u64) -> Result<StatusMessage> {
        let path = format!("api/datasources/{}", id);
        let response = self.delete(ctx, &path).await?;
        self.handle_response(response)
    }
}
