//! Test utilities for integration testing (available with `test-utils` feature).

use crate::config::{DatabaseConfig, PoolSettings};
use axum_test::TestServer;
use sqlx::PgPool;

/// Stand up a test server over the given pool.
///
/// Migrations are expected to have run already, which `#[sqlx::test]` takes
/// care of.
pub async fn create_test_app(pool: PgPool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, Some(pool))
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> crate::config::Config {
    crate::config::Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database: DatabaseConfig {
            // Never dialled: the pool under test is injected
            url: "postgres://localhost:5432/folio_test".to_string(),
            pool: PoolSettings {
                max_connections: 1,
                min_connections: 1,
                ..Default::default()
            },
        },
    }
}
