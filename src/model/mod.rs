//! Data transfer objects exchanged with API clients.

pub mod catalogue;
pub mod check;
pub mod route;
