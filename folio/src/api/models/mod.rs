//! API request and response data models.
//!
//! This module contains the data structures used for HTTP request
//! deserialization and response serialization. These models define the public
//! API contract.
//!
//! # Design Principles
//!
//! - **Separation of Concerns**: API models are distinct from database models,
//!   allowing independent evolution of API and storage representations
//! - **Explicit Validation**: Portfolio write bodies deserialize with all
//!   fields optional; required-field enforcement is a separate, typed step
//! - **OpenAPI**: All models are annotated with `utoipa` for automatic API docs
//!
//! # Modules
//!
//! - [`portfolio`]: Portfolio entry create/update requests and responses
//! - [`contact`]: Contact submission create request and response

pub mod contact;
pub mod portfolio;
