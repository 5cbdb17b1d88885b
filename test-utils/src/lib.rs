//! Discord OpenAPI Test Utils
//!
//! Shared fixtures for testing the schema catalogue and the HTTP service: conforming JSON
//! payloads for the main Discord schemas, and a builder for deriving invalid variants from them.
//!
//! # Overview
//!
//! - **fixture**: `entity()` / `entity_builder()` pairs per schema family
//! - **builder**: [`builder::PayloadBuilder`] for overwriting, removing and nesting values
//!
//! # Usage
//!
//! ```rust,ignore
//! use serde_json::json;
//! use test_utils::{builder::PayloadBuilder, fixture};
//!
//! let too_long = PayloadBuilder::from(fixture::command::entity())
//!     .set("name", json!("a".repeat(33)))
//!     .build();
//! assert!(schema::registry::validate_json("ApplicationCommandCreateRequest", &too_long).is_err());
//! ```

pub mod builder;
pub mod fixture;
