//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5001;

/// Default log filter
pub const DEFAULT_RUST_LOG: &str = "info";

// =============================================================================
// CONTENT DEFAULTS
// =============================================================================

/// Content root relative to the crate directory, used when `CONTENT_ROOT` is unset
pub const DEFAULT_CONTENT_ROOT: &str = "../DATA/data";

/// Layout used when `CONTENT_LAYOUT` is unset
pub const DEFAULT_CONTENT_LAYOUT: &str = "flat";

// =============================================================================
// DIRECTORY NAMES
// =============================================================================

/// Top-level and nested directory names in the content tree
pub mod dirs {
    pub const PROBLEMS: &str = "problems";
    pub const CONTESTS: &str = "contests";
    pub const SOLUTIONS: &str = "solutions";
    /// Flat layout: statement files live under `problems/<id>/details/`
    pub const DETAILS: &str = "details";
    pub const SAMPLES: &str = "samples";
    pub const TESTCASES: &str = "testcases";
}

// =============================================================================
// FILE NAMES
// =============================================================================

/// Well-known file names
pub mod files {
    pub const INDEX: &str = "index.json";
    pub const META: &str = "meta.json";

    // Problem statement
    pub const PROBLEM: &str = "problem.md";
    pub const DESCRIPTION: &str = "description.md";
    pub const INPUT: &str = "input.md";
    pub const OUTPUT: &str = "output.md";
    pub const CONSTRAINTS: &str = "constraints.md";
    pub const NOTES: &str = "notes.md";

    pub const SOLUTION: &str = "solution.md";

    // Contest
    pub const CONTEST: &str = "contest.md";
    pub const LEADERBOARD: &str = "leaderboard.json";
    pub const PARTICIPANTS: &str = "participants.json";
    pub const RULES: &str = "rules.md";
    pub const THEORY: &str = "theory.md";
}

/// Extensions of flat test case files
pub mod extensions {
    pub const CASE_INPUT: &str = "in";
    pub const CASE_OUTPUT: &str = "out";
}

// =============================================================================
// TEST CASE LABELS
// =============================================================================

/// Name prefixes for the two test case partitions
pub mod case_labels {
    pub const SAMPLES: &str = "samples";
    pub const TESTCASES: &str = "testcases";
}

// =============================================================================
// METADATA KEYS
// =============================================================================

/// Keys read out of `meta.json` documents
pub mod meta_keys {
    pub const ID: &str = "id";
    pub const AUTHORS: &str = "authors";
    pub const PROBLEMS: &str = "problems";
}

// =============================================================================
// MARKDOWN SECTIONS
// =============================================================================

/// Section names recognized in a single-file problem statement
pub mod sections {
    pub const DESCRIPTION: &str = "description";
    pub const INPUT: &str = "input";
    pub const OUTPUT: &str = "output";
    pub const CONSTRAINTS: &str = "constraints";
    pub const NOTES: &str = "notes";

    /// All recognized section names
    pub const ALL: &[&str] = &[DESCRIPTION, INPUT, OUTPUT, CONSTRAINTS, NOTES];

    /// Marker that opens a section heading
    pub const HEADING_MARKER: &str = "## ";
}
