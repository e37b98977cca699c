//! Domain models for the course catalog.
//!
//! This module contains the course record, the ordered tree that stores
//! courses, the catalog that ties a record source to the tree, and
//! configuration.

/// Course record.
pub mod course;
pub use course::Course;

pub mod tree;
pub use tree::Tree;

mod catalog;
pub use catalog::Catalog;

mod config;
pub use config::Config;
