//! HTTP service publishing the Discord API catalogue.
//!
//! The service renders the route catalogue and schema registry of the `schema` crate as an
//! OpenAPI 3.1 document at startup and exposes read and check endpoints over them.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Catalogue lookups, payload validation, request checking and
//!   document rendering
//! - **Model Layer** (`model/`) - Parameter and outcome types passed between the two
//! - **Error Layer** (`error/`) - Application error types rendered as Discord error bodies
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - The rendered Discord document shared by handlers
//! - **Startup** (`startup`) - Tracing, state construction and the CORS policy
//! - **Router** (`router`) - Route registration, this service's document and Swagger UI

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
