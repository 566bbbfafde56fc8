//! Sentimeter HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    AccountService, AnalysisService,
    ports::{ClassifierPort, HistoryStore, PasswordHasherPort, UserStore},
};
use infrastructure::{
    AppConfig, Argon2PasswordHasher, HfClassifierAdapter, ServerConfig, SqliteHistoryStore,
    SqliteUserStore, create_pool,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the configured log format
    // applies from the first event; a load failure is logged right after
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.server.log_format);

    info!("📊 Sentimeter v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.classifier.model,
        "Configuration loaded"
    );

    presentation_http::error::set_expose_internal_errors(config.server.expose_internal_errors);

    // Database pool and migrations; a broken database is fatal
    let pool = Arc::new(
        create_pool(&config.database)
            .map_err(|e| anyhow::anyhow!("Failed to initialize database: {e}"))?,
    );

    // Classifier client
    let classifier_adapter = HfClassifierAdapter::new(config.classifier.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize classifier: {e}"))?;

    let classifier: Arc<dyn ClassifierPort> = Arc::new(classifier_adapter);
    let users: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(Arc::clone(&pool)));
    let history: Arc<dyn HistoryStore> = Arc::new(SqliteHistoryStore::new(Arc::clone(&pool)));
    let hasher: Arc<dyn PasswordHasherPort> = Arc::new(Argon2PasswordHasher::new());

    let analysis_service = AnalysisService::new(classifier, Arc::clone(&users), history);
    let account_service = AccountService::new(users, hasher);

    // One startup probe; /ready keeps checking live after this
    if analysis_service.is_healthy().await {
        info!(model = %analysis_service.classifier_model(), "Classifier reachable");
    } else {
        warn!("Classifier not reachable, /ready reports 503 until it comes up");
    }

    let state = AppState {
        analysis_service: Arc::new(analysis_service),
        account_service: Arc::new(account_service),
    };

    // Middleware order: first added = outermost
    let mut app = routes::create_router(state).layer(TraceLayer::new_for_http());
    if config.server.cors_enabled {
        app = app.layer(cors_layer(&config.server));
    }

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Initialize the tracing subscriber with the configured output format
fn init_tracing(log_format: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,sentimeter_server=debug,tower_http=debug".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// CORS layer from config: allow-all in development, the configured
/// origins with GET/POST in production
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    use axum::http::{HeaderValue, Method};

    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Resolves when SIGINT or SIGTERM arrives
async fn shutdown_signal(timeout: Duration) {
    let sigint = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    let received = tokio::select! {
        () = sigint => "Ctrl+C",
        () = sigterm => "SIGTERM",
    };

    info!("📥 Received {received}, draining connections for up to {timeout:?}");
}
