//! Plain-text Course Catalog
//!
//! Courses are read from a flat delimited text file, one course per line, and
//! held in an ordered in-memory store keyed by course number.

pub mod domain;
pub use domain::{Catalog, Config, Course, Tree};

/// Reading course records from text sources.
pub mod storage;
pub use storage::{CsvParser, LoadError, RecordSource};
