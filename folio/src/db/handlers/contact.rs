//! Database repository for contact submissions.
//!
//! Contact submissions are append-only: the repository exposes creation and
//! listing and nothing else, matching the resource's external surface.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::contact::{ContactCreateDBRequest, ContactDBResponse},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Contacts<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Contacts<'c> {
    type CreateRequest = ContactCreateDBRequest;
    type Response = ContactDBResponse;

    #[instrument(skip(self, request), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let contact = sqlx::query_as::<_, ContactDBResponse>(
            r#"
            INSERT INTO contacts (name, email, mobile_no, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.mobile_no)
        .bind(&request.subject)
        .bind(&request.message)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(contact)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let contacts = sqlx::query_as::<_, ContactDBResponse>("SELECT * FROM contacts ORDER BY created_at")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(contacts)
    }
}

impl<'c> Contacts<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}
