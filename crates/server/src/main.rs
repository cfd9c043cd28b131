use clap::Parser;
use roster_core::config;
use roster_core::storage::MemberStore;
use roster_server::api::create_router;
use roster_server::api::handlers::AppState;
use roster_server::api::metrics;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster", about = "In-memory member directory service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// JSON array of member records loaded at startup
    #[arg(short, long, env = "ROSTER_SEED_FILE", default_value = config::DEFAULT_SEED_PATH)]
    seed_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("roster_server=info".parse()?)
                .add_directive("roster_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    let store = MemberStore::new();
    // A missing or broken seed file is logged by the store; start empty.
    if store.load_seed_file(&args.seed_file).is_err() {
        tracing::warn!(seed_file = ?args.seed_file, "Starting with an empty member list");
    }

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let state = AppState {
        store: store.clone(),
        prometheus_handle,
        start_time: Instant::now(),
    };
    let app = create_router(state);

    let metrics_store = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(config::METRICS_REFRESH_SECS));
        loop {
            interval.tick().await;
            metrics::update_member_metrics(&metrics_store);
        }
    });

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        members = store.len(),
        next_id = store.next_id(),
        "Server is running on http://localhost:{}",
        args.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
