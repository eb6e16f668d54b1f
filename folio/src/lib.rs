//! # folio: Portfolio and Contact API
//!
//! `folio` is the backend for a personal portfolio site. It exposes a JSON API for
//! managing the portfolio entries shown on the site and for recording submissions
//! from the site's contact form.
//!
//! ## Overview
//!
//! The service has two resources with different surfaces:
//!
//! - **Portfolio entries** (`/api/portfolio`) support the full management cycle:
//!   list, create, replace, and delete. Each entry has a required title and image
//!   plus an optional link.
//! - **Contact submissions** (`/api/contact`) are append-only: they can be recorded
//!   and listed, but never edited or removed. Every field is optional.
//!
//! Clients cannot tell validation failures apart from storage failures: both produce
//! a 500 with a generic message, and the details go to the server logs instead.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP
//! layer and uses PostgreSQL for persistence. Request handlers in [`api::handlers`]
//! validate incoming payloads and convert them into typed database requests, then call
//! repositories in [`db::handlers`] that own the SQL. Schema migrations are embedded in
//! the binary and run automatically on startup.
//!
//! Interactive API documentation is served at `/docs`.
//!
//! ## Usage
//!
//! ```bash
//! folio --config config.yaml
//! ```
//!
//! Configuration can come from a YAML file, `FOLIO_`-prefixed environment variables,
//! or the plain `DATABASE_URL` and `PORT` variables. See [`config`] for the full
//! surface.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use crate::openapi::ApiDoc;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use bon::Builder;
pub use config::Config;
use sqlx::{Connection, PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
pub use types::{ContactId, PortfolioId};

/// Shared state available to all request handlers.
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the folio database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Liveness response for the root path.
async fn root() -> &'static str {
    "Server is running..."
}

/// Connect to the database and bring the schema up to date.
///
/// Connecting is eager: an unreachable database fails startup within the
/// configured acquire timeout instead of surfacing on the first request.
async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let settings = &config.database.pool;

    let mut options = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.ping().await?;
                debug!("Database connection established");
                Ok(())
            })
        });
    if settings.idle_timeout_secs > 0 {
        options = options.idle_timeout(Duration::from_secs(settings.idle_timeout_secs));
    }
    if settings.max_lifetime_secs > 0 {
        options = options.max_lifetime(Duration::from_secs(settings.max_lifetime_secs));
    }

    let pool = options.connect(&config.database.url).await?;
    migrator().run(&pool).await?;

    Ok(pool)
}

/// Build the application router with all routes and middleware attached.
pub fn build_router(state: AppState) -> Router {
    // The site frontend is served from a different origin, so the API answers
    // cross-origin requests from anywhere.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/api/portfolio", get(api::handlers::portfolio::list_portfolios))
        .route("/api/portfolio", post(api::handlers::portfolio::create_portfolio))
        .route("/api/portfolio/{id}", put(api::handlers::portfolio::update_portfolio))
        .route("/api/portfolio/{id}", delete(api::handlers::portfolio::delete_portfolio))
        .route("/api/contact", get(api::handlers::contact::list_contacts))
        .route("/api/contact", post(api::handlers::contact::create_contact))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// The assembled application, ready to serve.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Create an application on the given pool instead of connecting fresh.
    ///
    /// Tests use this to run against the pool that `#[sqlx::test]` prepares,
    /// where migrations have already been applied.
    pub async fn new_with_pool(config: Config, pool: Option<PgPool>) -> anyhow::Result<Self> {
        debug!("Starting folio with configuration: {:#?}", config);

        let pool = match pool {
            Some(pool) => pool,
            None => setup_database(&config).await?,
        };

        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "folio listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        // Close database connections
        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
