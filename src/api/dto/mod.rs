//! Data Transfer Objects for REST request/response serialization.
//!
//! Request payloads embed validated domain types, so deserialization is
//! also validation.

pub mod summary_dto;

pub use summary_dto::*;
