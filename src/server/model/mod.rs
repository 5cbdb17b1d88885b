//! Server-side parameter and outcome types.
//!
//! Controllers convert request DTOs into these types before calling a service, and services
//! return them for the controller to convert back into response DTOs. Static catalogue types
//! from the `schema` crate are converted to DTOs here as well.

pub mod check;
pub mod route;
