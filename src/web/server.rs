use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::matching::{ClauseLocator, LocatorConfig};
use crate::utils::validation::{validate_body, ValidationError};

/// Route serving clause lookups
pub const CONTRACT_QUERY_PATH: &str = "/contract-query";

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_REQUEST_BODY_SIZE: usize = 16 * 1024 * 1024; // 16MB
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;
pub const RATE_LIMIT_PER_SECOND: u64 = 10;
pub const RATE_LIMIT_BURST: u32 = 50;

/// Shared application state, built once at startup
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub locator: ClauseLocator,
}

impl AppState {
    #[must_use]
    pub fn new(locator: ClauseLocator) -> Self {
        Self { locator }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        (status, Json(self.to_payload(None))).into_response()
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// The per-IP rate limiter keys on the peer address, so the router must be
/// served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_PER_SECOND)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?;

    let app = Router::new()
        .route(CONTRACT_QUERY_PATH, post(contract_query_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("no-referrer"),
                ))
                // IP-based rate limiting
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = LocatorConfig::with_min_clause_words(args.min_words);
    info!(
        min_clause_words = config.min_clause_words,
        "Configured clause locator"
    );
    let state = Arc::new(AppState::new(ClauseLocator::new(config)));
    let app = create_router(state)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting clause-locator web server at http://{addr}{CONTRACT_QUERY_PATH}");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// Locate a sentence's clause in a text.
///
/// The raw body is decoded here rather than through the `Json` extractor so
/// that every malformed body, including a missing content type, is answered
/// with the same `{"message": ...}` payload.
async fn contract_query_handler(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match validate_body(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected contract query: {e}");
            return e.into_response();
        }
    };

    let result = state.locator.locate(&request.text, &request.sentence);
    info!(
        result_found = result.is_found(),
        match_span = ?result.span(),
        sentence_len = request.sentence.len(),
        text_len = request.text.len(),
        "Evaluated contract query"
    );

    Json(result).into_response()
}
