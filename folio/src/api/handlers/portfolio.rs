use crate::AppState;
use crate::api::models::portfolio::{PortfolioCreate, PortfolioResponse, PortfolioUpdate};
use crate::db::errors::DbError;
use crate::db::handlers::{Portfolios, Repository};
use crate::db::models::portfolio::{PortfolioCreateDBRequest, PortfolioUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::PortfolioId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// Resolve a raw path segment to a portfolio identifier.
///
/// A malformed identifier can never match a stored record, so it maps to the
/// same "not found" outcome as an unknown one.
fn parse_portfolio_id(raw: &str) -> Result<PortfolioId> {
    raw.parse().map_err(|_| Error::NotFound { resource: "Portfolio" })
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    summary = "List portfolio entries",
    responses(
        (status = 200, description = "All portfolio entries", body = Vec<PortfolioResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_portfolios(State(state): State<AppState>) -> Result<Json<Vec<PortfolioResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Portfolios::new(&mut pool_conn);

    let entries = repo.list().await?;
    Ok(Json(entries.into_iter().map(PortfolioResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/portfolio",
    tag = "portfolio",
    summary = "Create a portfolio entry",
    request_body = PortfolioCreate,
    responses(
        (status = 201, description = "Entry created", body = PortfolioResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_portfolio(
    State(state): State<AppState>,
    Json(create): Json<PortfolioCreate>,
) -> Result<(StatusCode, Json<PortfolioResponse>)> {
    let request = PortfolioCreateDBRequest::try_from(create)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Portfolios::new(&mut pool_conn);

    let entry = repo.create(&request).await?;
    Ok((StatusCode::CREATED, Json(PortfolioResponse::from(entry))))
}

#[utoipa::path(
    put,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    summary = "Replace a portfolio entry",
    request_body = PortfolioUpdate,
    responses(
        (status = 200, description = "Entry replaced", body = PortfolioResponse),
        (status = 404, description = "Portfolio not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "Portfolio entry ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<PortfolioUpdate>,
) -> Result<Json<PortfolioResponse>> {
    let id = parse_portfolio_id(&id)?;
    let request = PortfolioUpdateDBRequest::try_from(update)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Portfolios::new(&mut pool_conn);

    match repo.update(id, &request).await {
        Ok(entry) => Ok(Json(PortfolioResponse::from(entry))),
        Err(DbError::NotFound) => Err(Error::NotFound { resource: "Portfolio" }),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    summary = "Delete a portfolio entry",
    responses(
        (status = 200, description = "Entry deleted"),
        (status = 404, description = "Portfolio not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "Portfolio entry ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_portfolio(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = parse_portfolio_id(&id)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Portfolios::new(&mut pool_conn);

    if repo.delete(id).await? {
        Ok(Json(json!({ "message": "Portfolio deleted" })))
    } else {
        Err(Error::NotFound { resource: "Portfolio" })
    }
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

        let response = app.get("/api/portfolio").await;
        response.assert_status_ok();

        let entries: Vec<PortfolioResponse> = response.json();
        assert!(entries.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_returns_entry_that_lists_show(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app
            .post("/api/portfolio")
            .json(&json!({ "title": "Logo", "image": "logo.png" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let created: PortfolioResponse = response.json();
        assert_eq!(created.title, "Logo");
        assert_eq!(created.image, "logo.png");
        assert_eq!(created.link, None);

        // An absent link serializes as an explicit null, not an omitted key
        let raw: Value = response.json();
        assert!(raw.as_object().is_some_and(|o| o.contains_key("link")));
        assert!(raw["link"].is_null());

        let list = app.get("/api/portfolio").await;
        let entries: Vec<PortfolioResponse> = list.json();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, created.id);
        assert_eq!(entries[0].title, "Logo");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_missing_title_adds_nothing(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app.post("/api/portfolio").json(&json!({ "image": "logo.png" })).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["error"], "Internal server error");

        let entries: Vec<PortfolioResponse> = app.get("/api/portfolio").await.json();
        assert!(entries.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_missing_image_adds_nothing(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app.post("/api/portfolio").json(&json!({ "title": "Logo" })).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let entries: Vec<PortfolioResponse> = app.get("/api/portfolio").await.json();
        assert!(entries.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_empty_title_rejected_like_missing(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app
            .post("/api/portfolio")
            .json(&json!({ "title": "", "image": "logo.png" }))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let entries: Vec<PortfolioResponse> = app.get("/api/portfolio").await.json();
        assert!(entries.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_replaces_every_field(pool: PgPool) {
        let app = create_test_app(pool).await;

        let created: PortfolioResponse = app
            .post("/api/portfolio")
            .json(&json!({ "title": "Old", "image": "old.png", "link": "https://old.example" }))
            .await
            .json();

        let response = app
            .put(&format!("/api/portfolio/{}", created.id))
            .json(&json!({ "title": "New", "image": "new.png" }))
            .await;
        response.assert_status_ok();

        let updated: PortfolioResponse = response.json();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.image, "new.png");
        // Omitted on update means cleared, not carried over
        assert_eq!(updated.link, None);

        let entries: Vec<PortfolioResponse> = app.get("/api/portfolio").await.json();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "New");
        assert_eq!(entries[0].link, None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_unknown_id_is_not_found(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app
            .put(&format!("/api/portfolio/{}", Uuid::new_v4()))
            .json(&json!({ "title": "New", "image": "new.png" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["error"], "Portfolio not found");

        // No upsert: nothing was created
        let entries: Vec<PortfolioResponse> = app.get("/api/portfolio").await.json();
        assert!(entries.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_malformed_id_is_not_found(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app
            .put("/api/portfolio/not-a-valid-id")
            .json(&json!({ "title": "New", "image": "new.png" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["error"], "Portfolio not found");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_validation_failure_leaves_entry_alone(pool: PgPool) {
        let app = create_test_app(pool).await;

        let created: PortfolioResponse = app
            .post("/api/portfolio")
            .json(&json!({ "title": "Keep", "image": "keep.png" }))
            .await
            .json();

        let response = app
            .put(&format!("/api/portfolio/{}", created.id))
            .json(&json!({ "image": "new.png" }))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let entries: Vec<PortfolioResponse> = app.get("/api/portfolio").await.json();
        assert_eq!(entries[0].title, "Keep");
        assert_eq!(entries[0].image, "keep.png");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_confirms_then_404s(pool: PgPool) {
        let app = create_test_app(pool).await;

        let created: PortfolioResponse = app
            .post("/api/portfolio")
            .json(&json!({ "title": "Logo", "image": "logo.png" }))
            .await
            .json();

        let response = app.delete(&format!("/api/portfolio/{}", created.id)).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"], "Portfolio deleted");

        let entries: Vec<PortfolioResponse> = app.get("/api/portfolio").await.json();
        assert!(entries.is_empty());

        // Deleting the same entry again is a 404
        let second = app.delete(&format!("/api/portfolio/{}", created.id)).await;
        second.assert_status(StatusCode::NOT_FOUND);

        let body: Value = second.json();
        assert_eq!(body["error"], "Portfolio not found");
    }
}
