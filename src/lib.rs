//! # summary-api
//!
//! REST service that stores URLs submitted for text summarization and
//! serves the resulting records.
//!
//! The crate is a thin CRUD layer: clients create a record for a URL, the
//! record starts with an empty summary, and clients read, list, update and
//! delete records by id. Generating summaries is not part of this service.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── SummaryStore trait (persistence/)
//!     │     ├── PostgresSummaryStore
//!     │     └── MemorySummaryStore
//!     │
//!     └── PostgreSQL (textsummary table)
//! ```

pub mod api;
pub mod app;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
