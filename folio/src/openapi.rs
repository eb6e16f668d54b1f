//! OpenAPI documentation configuration.
//!
//! Collects every route handler and schema into a single [`ApiDoc`] served
//! at `/docs`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "folio",
        description = "A small JSON API serving portfolio entries and contact submissions."
    ),
    paths(
        api::handlers::portfolio::list_portfolios,
        api::handlers::portfolio::create_portfolio,
        api::handlers::portfolio::update_portfolio,
        api::handlers::portfolio::delete_portfolio,
        api::handlers::contact::list_contacts,
        api::handlers::contact::create_contact,
    ),
    components(
        schemas(
            api::models::portfolio::PortfolioCreate,
            api::models::portfolio::PortfolioUpdate,
            api::models::portfolio::PortfolioResponse,
            api::models::contact::ContactCreate,
            api::models::contact::ContactResponse,
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio entry management"),
        (name = "contact", description = "Contact form submissions")
    )
)]
pub struct ApiDoc;
