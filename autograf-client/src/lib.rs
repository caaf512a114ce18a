//! Typed async client for the Grafana dashboard server REST API.
//!
//! # Features
//!
//! - Bearer token or basic authentication, chosen from one credential string
//! - Custom headers and per-organization scoping (`X-Grafana-Org-Id`)
//! - Per-call cancellation and deadlines through [`RequestContext`]
//! - Dashboard import, export, search and deletion
//! - Data source, alert and organization management
//!
//! # Example
//!
//! ```no_run
//! use autograf_client::{Client, RequestContext, Transport};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("http://localhost:3000", "api-key", Transport::default())?;
//! let ctx = RequestContext::background().with_timeout(Duration::from_secs(30));
//!
//! let raw = std::fs::read("dashboard.json")?;
//! let status = client.set_raw_dashboard(&ctx, &raw).await?;
//! println!("Imported {:?} (version {:?})", status.uid, status.version);
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! A credential containing `:` is `username:password` and travels as URL user
//! info (basic auth). Anything else is an API token sent as
//! `Authorization: Bearer <token>`.
//!
//! ```no_run
//! # use autograf_client::{Client, Transport};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let basic = Client::new("http://localhost:3000", "admin:admin", Transport::default())?;
//! let token = Client::new("http://localhost:3000", &std::env::var("GRAFANA_TOKEN")?, Transport::default())?;
//! # drop((basic, token));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! ```no_run
//! # use autograf_client::{Client, ClientError, RequestContext, Transport};
//! # async fn example() -> Result<(), ClientError> {
//! # let client = Client::new("http://localhost:3000", "api-key", Transport::default())?;
//! match client.get_dashboard_by_uid(&RequestContext::background(), "cIBgcSjkk").await {
//!     Ok(board) => println!("Found: {}", board.dashboard["title"]),
//!     Err(ClientError::Api { status: 404, .. }) => println!("Dashboard not found"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod alerts;
mod auth;
mod client;
mod context;
mod dashboards;
mod datasources;
mod error;
mod orgs;
mod params;
mod transport;
mod types;

pub use auth::Credentials;
pub use client::{Client, HeaderDerivation, ORG_ID_HEADER, RawResponse, USER_AGENT_VALUE};
pub use context::RequestContext;
pub use error::{ClientError, Result, TransportError};
pub use params::QueryParams;
pub use transport::{Transport, TransportConfig};
pub use types::{
    Address, Alert, AlertQuery, BoardProperties, DashboardUpload, DashboardWithMeta, Datasource,
    FoundBoard, HealthStatus, Org, OrgPreferences, SearchParams, SearchType, StatusMessage,
};

// Re-exported so callers can build methods and contexts without extra dependencies.
pub use reqwest::{Method, StatusCode};
pub use tokio_util::sync::CancellationToken;
