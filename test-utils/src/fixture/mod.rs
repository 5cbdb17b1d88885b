//! Conforming JSON payloads for the main schemas.
//!
//! Each module offers `entity()` for a payload with default values and `entity_builder()` for
//! customizing one. Payloads are plain `serde_json::Value`s so tests can feed them to the
//! registry, to handlers, or mutate them further with [`crate::builder::PayloadBuilder`].
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let message = fixture::message::entity_builder()
//!     .author(fixture::user::entity_builder().bot(true).build())
//!     .build();
//! ```

pub mod channel;
pub mod command;
pub mod message;
pub mod user;
