//! Database models for portfolio entries.

use crate::api::models::portfolio::{PortfolioCreate, PortfolioUpdate};
use crate::errors::ValidationError;
use crate::types::PortfolioId;
use chrono::{DateTime, Utc};

/// Required text fields reject absence and the empty string alike.
fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Required(field)),
    }
}

/// Database request for creating a portfolio entry
#[derive(Debug, Clone)]
pub struct PortfolioCreateDBRequest {
    pub title: String,
    pub image: String,
    pub link: Option<String>,
}

impl TryFrom<PortfolioCreate> for PortfolioCreateDBRequest {
    type Error = ValidationError;

    fn try_from(api: PortfolioCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required("title", api.title)?,
            image: required("image", api.image)?,
            link: api.link,
        })
    }
}

/// Database request for replacing a portfolio entry.
///
/// Updates are full replacements, so the same fields are required as on create.
#[derive(Debug, Clone)]
pub struct PortfolioUpdateDBRequest {
    pub title: String,
    pub image: String,
    pub link: Option<String>,
}

impl TryFrom<PortfolioUpdate> for PortfolioUpdateDBRequest {
    type Error = ValidationError;

    fn try_from(api: PortfolioUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required("title", api.title)?,
            image: required("image", api.image)?,
            link: api.link,
        })
    }
}

/// Database response for a portfolio entry
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortfolioDBResponse {
    pub id: PortfolioId,
    pub title: String,
    pub image: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
