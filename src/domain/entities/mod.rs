//! Core domain entities representing the redirect data model.
//!
//! Entities are plain data structures. The only logic they carry is the
//! construction-time validation needed to uphold their invariants.
//!
//! # Entity Types
//!
//! - [`ShortCode`] - A validated, non-empty short code
//! - [`UrlRecord`] - URL metadata resolved for a short code

pub mod short_code;
pub mod url_record;

pub use short_code::{ShortCode, ShortCodeError};
pub use url_record::UrlRecord;
