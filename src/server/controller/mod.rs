//! HTTP request handlers.
//!
//! Each handler converts its request into service parameters, calls the matching service and
//! converts the result back into a DTO. Handlers are documented with `utoipa::path` and
//! registered through `utoipa_axum` in the router, so this service's own OpenAPI document stays
//! in step with what is served.

pub mod catalogue;
pub mod check;
pub mod document;
pub mod route;
