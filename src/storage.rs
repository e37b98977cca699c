pub mod csv;
mod source;

pub use csv::CsvParser;
pub use source::{read_source, LoadError, RecordSource};
