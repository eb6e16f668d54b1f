use crate::AppState;
use crate::api::models::contact::{ContactCreate, ContactResponse};
use crate::db::handlers::{Contacts, Repository};
use crate::db::models::contact::ContactCreateDBRequest;
use crate::errors::{Error, Result};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    summary = "List contact submissions",
    responses(
        (status = 200, description = "All contact submissions", body = Vec<ContactResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<ContactResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Contacts::new(&mut pool_conn);

    let submissions = repo.list().await?;
    Ok(Json(submissions.into_iter().map(ContactResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    summary = "Record a contact submission",
    request_body = ContactCreate,
    responses(
        (status = 201, description = "Submission recorded", body = ContactResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(create): Json<ContactCreate>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    let request = ContactCreateDBRequest::from(create);

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Contacts::new(&mut pool_conn);

    let submission = repo.create(&request).await?;
    Ok((StatusCode::CREATED, Json(ContactResponse::from(submission))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use serde_json::json;
    use sqlx::PgPool;
    use uuid::Uuid;

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_starts_empty(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app.get("/api/contact").await;
        response.assert_status_ok();

        let submissions: Vec<ContactResponse> = response.json();
        assert!(submissions.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_stores_submission(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app
            .post("/api/contact")
            .json(&json!({
                "name": "Ada",
                "email": "ada@example.com",
                "mobile_no": "07700900000",
                "subject": "Commission",
                "message": "I would like a website."
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let created: ContactResponse = response.json();
        assert_eq!(created.name.as_deref(), Some("Ada"));
        assert_eq!(created.email.as_deref(), Some("ada@example.com"));
        assert_eq!(created.subject.as_deref(), Some("Commission"));

        let submissions: Vec<ContactResponse> = app.get("/api/contact").await.json();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].id, created.id);
        assert_eq!(submissions[0].message.as_deref(), Some("I would like a website."));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_accepts_partial_submission(pool: PgPool) {
        let app = create_test_app(pool).await;

        // No field is required on a contact submission
        let response = app
            .post("/api/contact")
            .json(&json!({ "message": "Just saying hi" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let created: ContactResponse = response.json();
        assert_eq!(created.message.as_deref(), Some("Just saying hi"));
        assert_eq!(created.name, None);
        assert_eq!(created.email, None);
        assert_eq!(created.mobile_no, None);
        assert_eq!(created.subject, None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_accepts_empty_submission(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app.post("/api/contact").json(&json!({})).await;
        response.assert_status(StatusCode::CREATED);

        let submissions: Vec<ContactResponse> = app.get("/api/contact").await.json();
        assert_eq!(submissions.len(), 1);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_and_delete_routes_do_not_exist(pool: PgPool) {
        let app = create_test_app(pool).await;

        let created: ContactResponse = app
            .post("/api/contact")
            .json(&json!({ "name": "Ada" }))
            .await
            .json();

        // Submissions are append-only: no update or delete route is mounted
        let update = app
            .put(&format!("/api/contact/{}", created.id))
            .json(&json!({ "name": "Grace" }))
            .await;
        update.assert_status(StatusCode::NOT_FOUND);

        let delete = app.delete(&format!("/api/contact/{}", Uuid::new_v4())).await;
        delete.assert_status(StatusCode::NOT_FOUND);

        let submissions: Vec<ContactResponse> = app.get("/api/contact").await.json();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].name.as_deref(), Some("Ada"));
    }
}
