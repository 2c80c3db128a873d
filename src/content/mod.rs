//! Content tree access
//!
//! Everything the service knows about the on-disk corpus lives here: where
//! entities are stored (`layout`, `repository`), how files are read
//! (`reader`), and the two small parsers for statements and test cases.

pub mod layout;
pub mod markdown;
pub mod reader;
pub mod repository;
pub mod testcases;

pub use layout::{ContentLayout, ProblemRef};
pub use markdown::{ProblemSections, split_sections};
pub use repository::ContentRepository;
pub use testcases::read_cases;
