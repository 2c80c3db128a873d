//! Domain models
//!
//! Transient projections of files in the content tree. Nothing here outlives
//! the request that built it.

pub mod contest;
pub mod document;
pub mod problem;
pub mod test_case;

pub use contest::*;
pub use document::*;
pub use problem::*;
pub use test_case::*;
