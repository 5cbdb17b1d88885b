//! Discord REST Schema Catalogue
//!
//! Declares the wire-level shape contracts of a subset of the Discord REST API: request and
//! response schemas, their validation constraints, and the route descriptors that tie an HTTP
//! method and path template to parameter, body and response schemas.
//!
//! # Overview
//!
//! - **Schemas** (`user`, `guild`, `channel`, `message`, ...) - serde types whose shape is
//!   checked by deserialization and whose bounds are checked by [`validate::Validate`]
//! - **Errors** (`error`) - Discord's error bodies including the recursive [`error::ErrorDetails`]
//! - **Registry** (`registry`) - lookup of every named schema for validation and documentation
//! - **Routes** (`route`, `routes`) - static route descriptors and path matching
//! - **Rate limits** (`ratelimit`) - the `X-RateLimit-*` response header shape
//! - **Security** (`security`) - bot token and OAuth2 scheme metadata
//!
//! # Usage
//!
//! ```rust,ignore
//! use schema::registry;
//!
//! let payload = serde_json::json!({ "name": "ping", "description": "Replies with pong" });
//! registry::validate_json("ApplicationCommandCreateRequest", &payload)?;
//! ```

#[macro_use]
mod macros;

pub mod application;
pub mod application_command;
pub mod channel;
pub mod component;
pub mod embed;
pub mod emoji;
pub mod error;
pub mod gateway;
pub mod guild;
pub mod interaction;
pub mod invite;
pub mod message;
pub mod oauth2;
pub mod presence;
pub mod ratelimit;
pub mod registry;
pub mod route;
pub mod routes;
pub mod security;
pub mod snowflake;
pub mod sticker;
pub mod user;
pub mod validate;
pub mod voice;
pub mod webhook;

pub use error::{ErrorDetails, ErrorResponse, FieldError, RatelimitedResponse, SchemaError};
pub use snowflake::Snowflake;
pub use validate::{Validate, Validator};
