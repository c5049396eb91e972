//! Pagination module
//!
//! Turns a page-based list endpoint into a lazy sequence of records.
//!
//! # Overview
//!
//! - [`Page`] is one list response: items, the total count and a `next` link.
//! - [`PageToken`] names a page; the first one is well known, later ones are
//!   lifted out of `next` links.
//! - [`PaginatedSequence`] walks the pages on demand, one record per
//!   `advance()`, and stops at the count reported by the first page.

mod sequence;
mod types;

pub use sequence::{PaginatedSequence, RecordStream};
pub use types::{Page, PageToken, PAGE_PARAM};
