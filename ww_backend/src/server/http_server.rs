use crate::clients::openai::OpenAiClient;
use crate::config::{AuthConfig, GeneratorConfig, ServerConfig};
use crate::db::connection::get_connection;
use crate::error::{ErrorBackend, Result};
use crate::interfaces::{journal, prompt};
use crate::server::app_state::AppState;
use crate::server::middleware::auth::require_bearer;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info, warn};
use ww_core::server::routes::print_all_backend_api_paths;

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Public and token-protected routes under `/api`, with request tracing.
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_protected = axum::Router::new()
        .merge(prompt::route::routes())
        .merge(journal::route::routes())
        .route_layer(from_fn_with_state(app_state.clone(), require_bearer));

    let routes_api = axum::Router::new()
        .merge(prompt::route::public_routes())
        .merge(routes_protected)
        .with_state(app_state);

    axum::Router::new()
        .nest("/api", routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the HTTP server.
///
/// # Behavior
/// - Loads `.env`, then the server, completion and auth settings.
/// - Connects to the database and applies migrations.
/// - Binds to the configured host/port and serves until shutdown.
///
/// Fails when `JWT_SECRET` is missing, the database is unreachable or the
/// address cannot be bound. A missing completion key only disables
/// generation.
#[tokio::main]
pub async fn http_server_backend() -> Result<()> {
    dotenv().ok();
    let server = ServerConfig::from_env();
    let generator = GeneratorConfig::from_env();
    let auth = AuthConfig::from_env()?;
    if !generator.is_configured() {
        warn!("COMPLETION_API_KEY is not set, prompt generation is disabled");
    }
    info!(?generator, "completion service");

    let db = Arc::new(get_connection().await?);
    let client = Arc::new(OpenAiClient::new(&generator));
    let app_state = Arc::new(AppState::new(db, client, generator, auth));

    print_all_backend_api_paths();
    let router = build_router(app_state);

    let address = server.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => {
            info!("Starting HTTP server on {}://{}", server.protocol, address);
            listener
        }
        Err(err) => {
            error!("Failed to bind to {}. {}", address, err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
