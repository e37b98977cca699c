use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::Course;

/// An object capable of turning source text into course records.
///
/// The catalog depends only on this trait, so alternative formats can be
/// substituted without touching the store.
pub trait RecordSource {
    /// Parses `text` into courses, in the order they appear.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MalformedRecord`] for the first record that cannot
    /// be parsed.
    fn parse(&self, text: &str) -> Result<Vec<Course>, LoadError>;
}

/// Errors that can occur when loading a course catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The catalog file does not exist.
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The catalog file exists but could not be read as text.
    #[error("Unreadable file: {}", path.display())]
    SourceUnreadable {
        /// Path of the catalog file.
        path: PathBuf,
        /// The underlying I/O or encoding error.
        #[source]
        source: io::Error,
    },

    /// A line did not contain at least a course number and a title.
    #[error("Malformed course on line {line}: {text}")]
    MalformedRecord {
        /// 1-based line number within the source text.
        line: usize,
        /// The offending line, verbatim.
        text: String,
    },
}

/// Reads the whole catalog file at `path` into a string.
///
/// The file handle is closed before this function returns.
///
/// # Errors
///
/// Returns [`LoadError::SourceNotFound`] if the file does not exist, and
/// [`LoadError::SourceUnreadable`] if it cannot be opened or read, or is not
/// valid UTF-8.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    let unreadable = |source| LoadError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::SourceNotFound(path.to_path_buf()),
        _ => unreadable(io_error),
    })?;

    let mut text = String::new();
    file.read_to_string(&mut text).map_err(unreadable)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    #[test]
    fn reads_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"CS100,Intro to CS\n").unwrap();

        let text = read_source(file.path()).unwrap();
        assert_eq!(text, "CS100,Intro to CS\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("CourseCatalog.csv");

        let error = read_source(&missing).unwrap_err();
        assert!(matches!(&error, LoadError::SourceNotFound(path) if *path == missing));
        assert!(error.to_string().starts_with("File not found: "));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x43, 0x53, 0xff, 0xfe, 0x2c]).unwrap();

        let error = read_source(file.path()).unwrap_err();
        assert!(matches!(error, LoadError::SourceUnreadable { .. }));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = TempDir::new().unwrap();

        let error = read_source(dir.path()).unwrap_err();
        assert!(matches!(error, LoadError::SourceUnreadable { .. }));
    }

    #[test]
    fn malformed_record_names_line() {
        let error = LoadError::MalformedRecord {
            line: 3,
            text: "CS499".to_string(),
        };
        assert_eq!(error.to_string(), "Malformed course on line 3: CS499");
    }
}
