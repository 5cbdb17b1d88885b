//! Service layer between controllers and the static catalogue.
//!
//! Services hold borrowed views of the route and schema catalogues, run lookups and checks
//! against them, and return parameter or outcome models for controllers to convert into DTOs.

pub mod catalogue;
pub mod check;
pub mod document;
pub mod route;
