//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! The API exposes two resources:
//!
//! - **Portfolio** (`/api/portfolio`, `/api/portfolio/{id}`): Showcase entries
//!   with full list/create/replace/delete management
//! - **Contact** (`/api/contact`): Append-only contact form submissions
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/docs` when the server is running.

pub mod handlers;
pub mod models;
