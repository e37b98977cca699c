use std::{borrow::Borrow, cmp::Ordering, fmt};

use serde::Serialize;

/// A course from the course catalog.
///
/// The course number is the identity of a course: two courses with the same
/// number compare equal regardless of title or prerequisites.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    /// Course number, for example `CS499`. Case-sensitive.
    number: String,
    /// Human-readable title. May be empty.
    title: String,
    /// Course numbers of the prerequisites, in source order.
    ///
    /// These are not checked against the catalog.
    prerequisites: Vec<String>,
}

impl Course {
    /// Creates a new course.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            prerequisites,
        }
    }

    /// Returns the course number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the prerequisite course numbers.
    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Returns a displayable representation including the prerequisites.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::Course;
    ///
    /// let course = Course::new("CS200", "Data Structures", vec!["CS100".to_string()]);
    /// assert_eq!(
    ///     course.details().to_string(),
    ///     "CS200, Data Structures\nPrerequisites: CS100"
    /// );
    ///
    /// let intro = Course::new("CS100", "Intro to CS", Vec::new());
    /// assert_eq!(
    ///     intro.details().to_string(),
    ///     "CS100, Intro to CS\nPrerequisites: None"
    /// );
    /// ```
    #[must_use]
    pub const fn details(&self) -> CourseDetails<'_> {
        CourseDetails { course: self }
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Course {}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

// Ordering is by number only, so borrowing as the number keeps `Ord` consistent.
impl Borrow<str> for Course {
    fn borrow(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.title)
    }
}

/// A wrapper type that formats a course along with its prerequisites.
///
/// This type is returned by [`Course::details`].
#[derive(Debug, Clone, Copy)]
pub struct CourseDetails<'a> {
    course: &'a Course,
}

impl fmt::Display for CourseDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.course)?;
        write!(f, "Prerequisites: ")?;
        if self.course.prerequisites.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", self.course.prerequisites.join(", "))
        }
    }
}
