//! API request/response models for contact submissions.

use crate::db::models::contact::ContactDBResponse;
use crate::types::ContactId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for submitting a contact form. No field is required; whatever
/// is sent is stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactCreate {
    /// Sender's name
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Sender's email address
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Sender's phone number
    #[schema(example = "07000000000")]
    pub mobile_no: Option<String>,
    /// Subject line
    #[schema(example = "Commission enquiry")]
    pub subject: Option<String>,
    /// Message body
    #[schema(example = "I'd like to talk about a logo.")]
    pub message: Option<String>,
}

/// Full contact submission returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Unique identifier for the submission
    #[schema(value_type = String, format = "uuid")]
    pub id: ContactId,
    /// Sender's name
    pub name: Option<String>,
    /// Sender's email address
    pub email: Option<String>,
    /// Sender's phone number
    pub mobile_no: Option<String>,
    /// Subject line
    pub subject: Option<String>,
    /// Message body
    pub message: Option<String>,
    /// When the submission was received
    pub created_at: DateTime<Utc>,
}

impl From<ContactDBResponse> for ContactResponse {
    fn from(db: ContactDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            mobile_no: db.mobile_no,
            subject: db.subject,
            message: db.message,
            created_at: db.created_at,
        }
    }
}
