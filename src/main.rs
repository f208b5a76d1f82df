//! Cragpanel server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use cragpanel::adapters::auth::JwtTokenVerifier;
use cragpanel::adapters::http::{admin_router, auth_middleware, center_router, AdminAppState, AuthState, CenterAppState};
use cragpanel::adapters::postgres::{
    PostgresApprovedFileRepository, PostgresCenterRepository, PostgresFeeRepository,
    PostgresLectorRepository, PostgresPostReader, PostgresReviewAnswerRepository,
    PostgresReviewReader, PostgresUserRepository,
};
use cragpanel::adapters::storage::LocalBlobStorage;
use cragpanel::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let admin_state = AdminAppState {
        centers: Arc::new(PostgresCenterRepository::new(pool.clone())),
        lectors: Arc::new(PostgresLectorRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        approved_files: Arc::new(PostgresApprovedFileRepository::new(pool.clone())),
        blob_storage: Arc::new(LocalBlobStorage::new(
            &config.storage.root,
            &config.storage.base_url,
        )),
    };

    let center_state = CenterAppState {
        centers: Arc::new(PostgresCenterRepository::new(pool.clone())),
        fees: Arc::new(PostgresFeeRepository::new(pool.clone())),
        posts: Arc::new(PostgresPostReader::new(pool.clone())),
        reviews: Arc::new(PostgresReviewReader::new(pool.clone())),
        answers: Arc::new(PostgresReviewAnswerRepository::new(pool.clone())),
    };

    let auth_state: AuthState = Arc::new(JwtTokenVerifier::new(&config.auth.jwt_secret));

    let api = Router::new()
        .merge(admin_router().with_state(admin_state))
        .merge(center_router().with_state(center_state))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);
    for origin in config.server.cors_origins_list() {
        cors = cors.allow_origin(origin.parse::<HeaderValue>()?);
    }

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api/v1", api)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
