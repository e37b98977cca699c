//! The loaded course catalog
//!
//! The [`Catalog`] owns the ordered [`Tree`] of courses and the
//! [`RecordSource`] used to populate it. It is the only type the command line
//! interface talks to.

use std::path::Path;

use tracing::instrument;

use crate::{
    domain::{tree::Iter, Course, Tree},
    storage::{read_source, CsvParser, LoadError, RecordSource},
};

/// An in-memory course catalog, ordered by course number.
#[derive(Debug, Default)]
pub struct Catalog<S = CsvParser> {
    source: S,
    courses: Tree<Course>,
}

impl<S> Catalog<S> {
    /// Creates an empty catalog which parses text with `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            courses: Tree::new(),
        }
    }

    /// Returns `true` if no courses are loaded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Returns the number of loaded courses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.courses.len()
    }

    /// Finds a course by its exact (case-sensitive) number.
    #[must_use]
    pub fn find_by_number(&self, number: &str) -> Option<&Course> {
        self.courses.search(number)
    }

    /// Visits every course in ascending order of course number.
    pub fn for_each_in_order<F>(&self, visit: F)
    where
        F: FnMut(&Course),
    {
        self.courses.traverse_in_order(visit);
    }

    /// Returns an iterator over the courses in ascending order of course
    /// number.
    pub fn courses(&self) -> Iter<'_, Course> {
        self.courses.iter()
    }
}

impl<S: RecordSource> Catalog<S> {
    /// Replaces the contents of the catalog with the courses parsed from
    /// `text`.
    ///
    /// If the text contains more than one course with the same number, the
    /// first one is kept and the rest are discarded.
    ///
    /// Returns the number of courses in the catalog after loading.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed. The catalog is left
    /// exactly as it was before the call.
    #[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn load(&mut self, text: &str) -> Result<usize, LoadError> {
        // Parse everything before touching the tree, so a failure leaves the
        // previous catalog in place.
        let parsed = self.source.parse(text)?;

        self.courses.clear();
        let mut discarded = 0usize;
        for course in parsed {
            if !self.courses.insert(course) {
                discarded += 1;
            }
        }

        if discarded > 0 {
            tracing::debug!("Discarded {discarded} courses with duplicate numbers");
        }
        tracing::debug!("Loaded {} courses", self.courses.len());
        Ok(self.courses.len())
    }

    /// Reads the catalog file at `path` and loads it as with
    /// [`Catalog::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or cannot
    /// be parsed. The catalog is left unchanged on error.
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        let text = read_source(path)?;
        self.load(&text)
    }
}

impl<'a, S> IntoIterator for &'a Catalog<S> {
    type Item = &'a Course;
    type IntoIter = Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses()
    }
}
