//! Common type definitions shared across the API and database layers.
//!
//! # ID Types
//!
//! Entity IDs are UUIDs wrapped in type aliases:
//!
//! - [`PortfolioId`]: Portfolio entry identifier
//! - [`ContactId`]: Contact submission identifier
//!
//! # Utility Functions
//!
//! - [`abbrev_uuid`]: Abbreviate UUIDs to first 8 chars for logging

use uuid::Uuid;

// Type aliases for IDs
pub type PortfolioId = Uuid;
pub type ContactId = Uuid;

/// Abbreviate a UUID to its first 8 characters for more readable logs and traces
/// Example: "550e8400-e29b-41d4-a716-446655440000" -> "550e8400"
pub fn abbrev_uuid(uuid: &Uuid) -> String {
    uuid.to_string().chars().take(8).collect()
}
