//! Business logic services
//!
//! Each service composes the content repository, the readers and the two
//! parsers into one response per endpoint.

pub mod contest_service;
pub mod problem_service;
pub mod solution_service;

pub use contest_service::ContestService;
pub use problem_service::ProblemService;
pub use solution_service::SolutionService;
