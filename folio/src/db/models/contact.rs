//! Database models for contact submissions.

use crate::api::models::contact::ContactCreate;
use crate::types::ContactId;
use chrono::{DateTime, Utc};

/// Database request for creating a contact submission.
///
/// Every field passes through as given; there is no required-field contract
/// on this resource.
#[derive(Debug, Clone)]
pub struct ContactCreateDBRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl From<ContactCreate> for ContactCreateDBRequest {
    fn from(api: ContactCreate) -> Self {
        Self {
            name: api.name,
            email: api.email,
            mobile_no: api.mobile_no,
            subject: api.subject,
            message: api.message,
        }
    }
}

/// Database response for a contact submission
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactDBResponse {
    pub id: ContactId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}
