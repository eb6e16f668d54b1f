//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern to provide clean abstractions over
//! database operations.
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for each resource
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! # Repository Pattern
//!
//! The [`handlers`] module provides one repository per table. Handlers acquire
//! a connection from the shared pool, construct the repository over it, and
//! issue exactly one operation per request:
//!
//! ```ignore
//! use folio::db::handlers::{Contacts, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Contacts::new(&mut conn);
//!
//!     let submissions = repo.list().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/`
//! directory. The [`crate::migrator`] function provides access to the
//! migrator:
//!
//! ```ignore
//! folio::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
