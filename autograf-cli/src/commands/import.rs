//! Import command - load dashboard JSON files into a server.

use anyhow::{Context, Result};
use autograf_client::{Client, RequestContext, Transport};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options for an import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Server base URL.
    pub server_url: String,
    /// API key or `user:password`.
    pub credential: String,
    /// Directory holding the dashboard files.
    pub dir: PathBuf,
    /// Organization to import into.
    pub org_id: Option<u64>,
    /// Per-dashboard request deadline.
    pub timeout: Option<Duration>,
}

/// Outcome of an import run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
}

/// Run the import command.
///
/// Fails only when the client cannot be built or the directory cannot be
/// listed; a bad dashboard file is logged and skipped.
pub async fn run(options: &ImportOptions, ctx: &RequestContext) -> Result<ImportSummary> {
    let mut client = Client::new(&options.server_url, &options.credential, Transport::default())
        .context("Failed to create a client")?;
    if let Some(org_id) = options.org_id {
        client.set_org_id_header(org_id);
    }

    let files = dashboard_files(&options.dir)
        .await
        .with_context(|| format!("Failed to list {}", options.dir.display()))?;

    tracing::info!(
        dir = %options.dir.display(),
        files = files.len(),
        "Importing dashboards"
    );

    Ok(import_files(&client, ctx, &files, options.timeout).await)
}

/// `*.json` files directly inside `dir`, sorted by name.
pub async fn dashboard_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_name().to_string_lossy().ends_with(".json") {
            continue;
        }
        if entry.file_type().await?.is_dir() {
            continue;
        }
        files.push(entry.path());
    }

    files.sort();
    Ok(files)
}

/// Post each file's bytes as a raw dashboard, continuing past failures.
///
/// Stops early only when `ctx` is canceled.
pub async fn import_files(
    client: &Client,
    ctx: &RequestContext,
    files: &[PathBuf],
    timeout: Option<Duration>,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for (index, file) in files.iter().enumerate() {
        if ctx.is_canceled() {
            tracing::warn!(remaining = files.len() - index, "Import interrupted");
            break;
        }

        let raw = match tokio::fs::read(file).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(
                    file = %file.display(),
                    error = %e,
                    "Failed to read dashboard file"
                );
                summary.failed += 1;
                continue;
            }
        };

        let call_ctx = match timeout {
            Some(timeout) => ctx.child().with_timeout(timeout),
            None => ctx.child(),
        };

        match client.set_raw_dashboard(&call_ctx, &raw).await {
            Ok(status) => {
                tracing::info!(
                    file = %file.display(),
                    uid = status.uid.as_deref().unwrap_or("-"),
                    version = ?status.version,
                    "Imported dashboard"
                );
                summary.imported += 1;
            }
            Err(e) => {
                tracing::error!(
                    file = %file.display(),
                    error = %e,
                    "Error on importing dashboard"
                );
                summary.failed += 1;
            }
        }
    }

    summary
}
