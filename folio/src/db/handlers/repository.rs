//! Base repository trait for database operations.

/// Contains the Repository trait.
///
/// A repository is a data access layer for one postgres table: it wraps a
/// connection and owns all SQL touching that table.
use crate::db::errors::Result;

/// Base repository trait providing the operations common to every resource
///
/// Only creation and listing are shared across resources. Lookups, updates and
/// deletes exist solely on the repositories whose resource supports them, so a
/// resource without those operations cannot be handed one by accident.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// List all entities
    async fn list(&mut self) -> Result<Vec<Self::Response>>;
}
