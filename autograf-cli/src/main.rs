//! import-dashboards - bulk import dashboard JSON files into a server.

mod commands;
mod logging;

use autograf_client::RequestContext;
use clap::Parser;
use clap::error::ErrorKind;
use commands::import::{ImportOptions, ImportSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Import every `*.json` dashboard in a directory.
#[derive(Parser)]
#[command(name = "import-dashboards")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server base URL (e.g. http://localhost:3000)
    server_url: String,

    /// API key, or user:password for basic auth
    credential: String,

    /// Directory to read dashboards from
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Organization ID to import into
    #[arg(long)]
    org_id: Option<u64>,

    /// Per-dashboard timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn import_options(&self) -> ImportOptions {
        ImportOptions {
            server_url: self.server_url.clone(),
            credential: self.credential.clone(),
            dir: self.dir.clone(),
            org_id: self.org_id,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            // A wrong argument count only prints usage.
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            _ => e.exit(),
        },
    };

    if let Err(e) = logging::setup_logging(cli.verbose) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let ctx = RequestContext::background();
    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, canceling remaining imports");
            interrupt.cancel();
        }
    });

    match commands::import::run(&cli.import_options(), &ctx).await {
        Ok(ImportSummary { imported, failed }) => {
            println!("Imported {imported} dashboard(s), {failed} failed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Import failed");
            ExitCode::FAILURE
        }
    }
}
