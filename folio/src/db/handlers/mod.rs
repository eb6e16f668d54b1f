//! Repository implementations for database access.
//!
//! This module provides repository structs for each resource in the system.
//! Repositories follow a consistent pattern and implement the [`Repository`]
//! trait for the operations every resource shares.
//!
//! # Design Pattern
//!
//! Each repository:
//! - Wraps a SQLx connection
//! - Provides strongly-typed operations for exactly one table
//! - Handles query construction and parameter binding
//! - Returns models from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`Portfolios`]: Portfolio entries (create, list, get, update, delete)
//! - [`Contacts`]: Contact submissions (create and list only; the resource is
//!   append-only and its repository has no other methods)
//!
//! # Common Pattern
//!
//! ```ignore
//! use folio::db::handlers::{Portfolios, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Portfolios::new(&mut conn);
//!
//!     let entries = repo.list().await?;
//!     Ok(())
//! }
//! ```

pub mod contact;
pub mod portfolio;
pub mod repository;

pub use contact::Contacts;
pub use portfolio::Portfolios;
pub use repository::Repository;
