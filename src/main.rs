use std::sync::Arc;

use planner_relay::{
    config::AppConfig,
    error::RelayError,
    routes,
    services::completion::GroqClient,
    state::AppState,
};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env().unwrap_or_else(|e| exit_on_startup_error(e));
    let client = GroqClient::new(&config).unwrap_or_else(|e| exit_on_startup_error(e));

    info!(model = config.model_id, upstream = client.url(), "Groq client ready");

    let state = Arc::new(AppState::new(client));
    let app = routes::create_router().with_state(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🚀 planner relay running at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn exit_on_startup_error(err: RelayError) -> ! {
    eprintln!("ERROR: {}", err);
    if matches!(err, RelayError::CredentialMissing) {
        eprintln!("Please create a .env file with GROQ_API_KEY=your_key");
    }
    std::process::exit(1);
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down");
}
