//! Domain layer: the summary record and its validated value types.
//!
//! [`SummaryRecord`] is the persisted entity. [`SummaryId`] and
//! [`SummaryUrl`] carry the boundary rules (positive ids, absolute
//! `http`/`https` URLs) so that invalid input cannot reach a store.

pub mod summary_id;
pub mod summary_record;
pub mod summary_url;

pub use summary_id::SummaryId;
pub use summary_record::SummaryRecord;
pub use summary_url::{InvalidUrl, SummaryUrl};
