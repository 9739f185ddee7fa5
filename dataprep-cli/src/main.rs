use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dataprep_resources::audit::create_audit_logger;
use dataprep_resources::remote::DataPrepClient;
use dataprep_resources::{ClientConfig, HandlerRequest, HttpClient, MemoryClient, dispatch};

#[derive(Parser, Debug)]
#[command(name = "dataprep-handler")]
#[command(about = "Run one lifecycle invocation against the data-preparation service")]
struct Args {
    /// Service endpoint (a signing proxy or local emulator)
    #[arg(long, default_value = dataprep_resources::config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Per-call attempt timeout in seconds
    #[arg(long, default_value_t = 28)]
    timeout_secs: u64,

    /// Serve the invocation from an in-process service instead of the endpoint
    #[arg(long)]
    dev: bool,

    /// Path of the invocation JSON, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    request: PathBuf,
}

async fn read_request(path: &Path) -> anyhow::Result<HandlerRequest> {
    let raw = if path.as_os_str() == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("failed to read invocation from stdin")?;
        raw
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read invocation from {}", path.display()))?
    };
    serde_json::from_str(&raw).context("invocation is not a valid request")
}

fn build_client(args: &Args) -> anyhow::Result<Arc<dyn DataPrepClient>> {
    if args.dev {
        warn!("Development mode: using an in-process service, nothing is persisted");
        return Ok(Arc::new(MemoryClient::new()));
    }
    if args.timeout_secs == 0 {
        bail!("--timeout-secs must be greater than zero");
    }
    let config = ClientConfig::new(args.endpoint.clone())
        .with_attempt_timeout(Duration::from_secs(args.timeout_secs));
    let client = HttpClient::new(&config).context("invalid client configuration")?;
    Ok(Arc::new(client))
}

/// Default log levels: the library, this binary and the audit trail.
const LOG_DIRECTIVES: [&str; 3] = [
    "dataprep_resources=info",
    "dataprep_handler=info",
    "audit=info",
];

fn log_filter(base: EnvFilter) -> anyhow::Result<EnvFilter> {
    LOG_DIRECTIVES
        .iter()
        .try_fold(base, |filter, directive| -> anyhow::Result<EnvFilter> {
            Ok(filter.add_directive(directive.parse()?))
        })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the progress event only.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(EnvFilter::from_default_env())?)
        .init();

    let args = Args::parse();

    let client = build_client(&args)?;
    let audit = create_audit_logger("dataprep-handler");
    let request = read_request(&args.request).await?;

    info!(
        "Invoking {} on {} via {}",
        request.action,
        request.type_name,
        if args.dev { "memory" } else { args.endpoint.as_str() }
    );

    let event = dispatch(client, audit, request).await;
    println!("{}", serde_json::to_string(&event)?);
    Ok(())
}
