use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hostscout_bus::{BroadcastBus, BusMessage};
use hostscout_common::{Config, DiscoveryRequest};
use hostscout_sources::circl::Circl;
use hostscout_sources::fetch::HttpFetcher;
use hostscout_sources::registry::SourceRegistry;
use hostscout_sources::source::InvocationContext;

#[derive(Parser)]
#[command(name = "hostscout", about = "Passive-DNS subdomain discovery")]
struct Args {
    /// Domains to enumerate.
    #[arg(required = true)]
    domains: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hostscout=info".parse()?))
        .init();

    let args = Args::parse();

    info!("Hostscout starting...");

    let config = Config::from_env();
    config.log_redacted();

    let bus = Arc::new(BroadcastBus::new(256));
    let mut rx = bus.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(message) = rx.recv().await {
            match message {
                BusMessage::NameDiscovered { event } => {
                    info!(
                        name = %event.name,
                        domain = %event.domain,
                        source = %event.source,
                        "Discovered"
                    );
                }
                BusMessage::Log { message } => info!("{message}"),
                BusMessage::SourceActive { .. } => {}
            }
        }
    });

    let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(
        config.http_timeout_secs,
    )));
    let mut circl = Circl::new(fetcher);
    circl.configure(&config);

    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(circl));

    // Ctrl-c aborts in-flight fetches and stops publishing.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown requested");
                cancel.cancel();
            }
        });
    }

    let run_id = uuid::Uuid::new_v4().to_string();
    let ctx = InvocationContext::with_cancel(bus.clone(), cancel.clone());
    for domain in &args.domains {
        if cancel.is_cancelled() {
            break;
        }
        let request = DiscoveryRequest {
            domain: domain.clone(),
            run_id: run_id.clone(),
        };
        registry.dispatch(&ctx, &request).await;
    }

    // Drop every sender so the printer drains and exits.
    drop(ctx);
    drop(bus);
    printer.await?;

    info!("Enumeration complete");
    Ok(())
}
