//! API request/response models for portfolio entries.

use crate::db::models::portfolio::PortfolioDBResponse;
use crate::types::PortfolioId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a portfolio entry.
///
/// Every field deserializes as optional: required-field enforcement happens in
/// the explicit validation step, not at the deserialization boundary, so a
/// missing `title` reaches the handler instead of bouncing off the extractor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioCreate {
    /// Title of the entry (required at validation time)
    #[schema(example = "Logo")]
    pub title: Option<String>,
    /// Image URL or reference string (required at validation time)
    #[schema(example = "logo.png")]
    pub image: Option<String>,
    /// Optional link to the work itself
    #[schema(example = "https://example.com/work/logo")]
    pub link: Option<String>,
}

/// Request body for replacing a portfolio entry. The same shape as
/// [`PortfolioCreate`]: updates are full replacements, never partial patches.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioUpdate {
    /// New title (required at validation time)
    #[schema(example = "Logo, reworked")]
    pub title: Option<String>,
    /// New image URL or reference string (required at validation time)
    #[schema(example = "logo-v2.png")]
    pub image: Option<String>,
    /// New link; omitting it clears any stored one
    #[schema(example = "https://example.com/work/logo")]
    pub link: Option<String>,
}

/// Full portfolio entry returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioResponse {
    /// Unique identifier for the entry
    #[schema(value_type = String, format = "uuid")]
    pub id: PortfolioId,
    /// Title of the entry
    pub title: String,
    /// Image URL or reference string
    pub image: String,
    /// Link to the work itself; null when not set
    pub link: Option<String>,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
    /// When the entry was last replaced
    pub updated_at: DateTime<Utc>,
}

impl From<PortfolioDBResponse> for PortfolioResponse {
    fn from(db: PortfolioDBResponse) -> Self {
        Self {
            id: db.id,
            title: db.title,
            image: db.image,
            link: db.link,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
