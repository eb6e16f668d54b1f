//! Database record models matching table schemas.
//!
//! This module contains struct definitions that directly correspond to database
//! table rows. These models are used by repositories to return query results
//! and accept insertion/update data.
//!
//! # Design Principles
//!
//! - **Schema Mapping**: Each model struct matches a database table schema
//! - **SQLx Integration**: Response models derive `sqlx::FromRow` for query results
//! - **Separation**: Database models are distinct from API models to allow
//!   independent evolution of storage and API representations
//!
//! # Modules
//!
//! - [`portfolio`]: Portfolio entry rows and write requests
//! - [`contact`]: Contact submission rows and write requests
//!
//! # Conversion from API Models
//!
//! Write requests convert from API models at the layer boundary; for portfolio
//! entries the conversion is `TryFrom` and carries the required-field
//! validation:
//!
//! ```ignore
//! use folio::api::models::portfolio::PortfolioCreate;
//! use folio::db::models::portfolio::PortfolioCreateDBRequest;
//!
//! let api: PortfolioCreate = /* deserialized body */;
//! let request = PortfolioCreateDBRequest::try_from(api)?;
//! ```

pub mod contact;
pub mod portfolio;
