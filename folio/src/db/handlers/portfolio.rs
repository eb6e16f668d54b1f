//! Database repository for portfolio entries.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::portfolio::{PortfolioCreateDBRequest, PortfolioDBResponse, PortfolioUpdateDBRequest},
};
use crate::types::{PortfolioId, abbrev_uuid};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Portfolios<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Portfolios<'c> {
    type CreateRequest = PortfolioCreateDBRequest;
    type Response = PortfolioDBResponse;

    #[instrument(skip(self, request), fields(title = %request.title), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        // id, created_at and updated_at come from database defaults
        let portfolio = sqlx::query_as::<_, PortfolioDBResponse>(
            r#"
            INSERT INTO portfolios (title, image, link)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.image)
        .bind(&request.link)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(portfolio)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let portfolios = sqlx::query_as::<_, PortfolioDBResponse>("SELECT * FROM portfolios ORDER BY created_at")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(portfolios)
    }
}

impl<'c> Portfolios<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), fields(portfolio_id = %abbrev_uuid(&id)), err)]
    pub async fn get_by_id(&mut self, id: PortfolioId) -> Result<Option<PortfolioDBResponse>> {
        let portfolio = sqlx::query_as::<_, PortfolioDBResponse>("SELECT * FROM portfolios WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(portfolio)
    }

    /// Replace every field of the entry with the given identifier
    #[instrument(skip(self, request), fields(portfolio_id = %abbrev_uuid(&id)), err)]
    pub async fn update(&mut self, id: PortfolioId, request: &PortfolioUpdateDBRequest) -> Result<PortfolioDBResponse> {
        let portfolio = sqlx::query_as::<_, PortfolioDBResponse>(
            r#"
            UPDATE portfolios SET
                title = $2,
                image = $3,
                link = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.image)
        .bind(&request.link)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or_else(|| DbError::NotFound)?;

        Ok(portfolio)
    }

    #[instrument(skip(self), fields(portfolio_id = %abbrev_uuid(&id)), err)]
    pub async fn delete(&mut self, id: PortfolioId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
