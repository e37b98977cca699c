//! Delimited text parsing
//!
//! The catalog file is a flat table with one course per line:
//!
//! ```text
//! CS100,Intro to CS
//! CS200,Data Structures,CS100
//! CS300,Algorithms,CS100,CS200
//! ```
//!
//! Fields are `number, title, [prerequisite, ...]`. There is no header row and
//! no quoting, so a field cannot contain the delimiter.

use crate::{
    storage::{LoadError, RecordSource},
    Course,
};

/// The default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Parses delimited course lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvParser {
    delimiter: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl CsvParser {
    /// Creates a parser splitting fields on `delimiter`.
    #[must_use]
    pub const fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Returns the field delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    fn parse_line(&self, line_number: usize, line: &str) -> Result<Course, LoadError> {
        let mut fields = line.split(self.delimiter);

        let (Some(number), Some(title)) = (fields.next(), fields.next()) else {
            return Err(LoadError::MalformedRecord {
                line: line_number,
                text: line.to_string(),
            });
        };

        // Trailing delimiters leave empty fields behind; those are not courses.
        let prerequisites = fields
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Course::new(number, title, prerequisites))
    }
}

impl RecordSource for CsvParser {
    fn parse(&self, text: &str) -> Result<Vec<Course>, LoadError> {
        let mut courses = Vec::new();

        for (index, line) in lines(text).enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            courses.push(self.parse_line(index + 1, line)?);
        }

        Ok(courses)
    }
}

/// Splits `text` into lines.
///
/// `\r\n` is a single break. A lone `\r`, the vertical tab and form feed, and
/// the Unicode next-line, line and paragraph separators also end a line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(is_line_break))
}

const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn parse(text: &str) -> Result<Vec<Course>, LoadError> {
        CsvParser::default().parse(text)
    }

    fn numbers(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(Course::number).collect()
    }

    #[test]
    fn parses_number_title_and_prerequisites() {
        let courses = parse("CS300,Algorithms,CS100,CS200").unwrap();

        assert_eq!(courses.len(), 1);
        let course = &courses[0];
        assert_eq!(course.number(), "CS300");
        assert_eq!(course.title(), "Algorithms");
        assert_eq!(course.prerequisites(), ["CS100", "CS200"]);
    }

    #[test]
    fn preserves_source_order() {
        let courses = parse("CS300,Algorithms\nCS100,Intro to CS\nCS200,Data Structures").unwrap();
        assert_eq!(numbers(&courses), ["CS300", "CS100", "CS200"]);
    }

    #[test]
    fn keeps_duplicate_lines() {
        // Duplicate handling belongs to the store, not the parser.
        let courses = parse("CS300,Algorithms\nCS300,Algorithms II").unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].title(), "Algorithms II");
    }

    #[test_case("CS100,Intro\n\nCS200,DS\n"; "blank line")]
    #[test_case("\n\nCS100,Intro\nCS200,DS"; "leading blank lines")]
    #[test_case("CS100,Intro\r\n\r\nCS200,DS\r\n"; "crlf endings")]
    #[test_case("CS100,Intro\n   \n\t\nCS200,DS"; "whitespace only lines")]
    #[test_case("CS100,Intro\rCS200,DS"; "carriage return endings")]
    #[test_case("CS100,Intro\r\rCS200,DS\r"; "carriage return blank line")]
    #[test_case("CS100,Intro\u{2028}CS200,DS"; "unicode line separator")]
    fn skips_blank_lines(text: &str) {
        let courses = parse(text).unwrap();
        assert_eq!(numbers(&courses), ["CS100", "CS200"]);
        assert_eq!(courses[0].title(), "Intro");
        assert_eq!(courses[1].title(), "DS");
    }

    #[test_case(""; "empty input")]
    #[test_case("\n\n\n"; "only newlines")]
    #[test_case("\r\n  \r\n"; "only whitespace")]
    fn no_lines_yields_no_courses(text: &str) {
        assert!(parse(text).unwrap().is_empty());
    }

    #[test]
    fn empty_title_is_allowed() {
        let courses = parse("CS100,").unwrap();
        assert_eq!(courses[0].number(), "CS100");
        assert_eq!(courses[0].title(), "");
    }

    #[test]
    fn empty_prerequisites_are_dropped() {
        let courses = parse("CS300,Algorithms,,CS100,,CS200,").unwrap();
        assert_eq!(courses[0].prerequisites(), ["CS100", "CS200"]);
    }

    #[test]
    fn fields_are_not_trimmed() {
        let courses = parse(" CS300 , Algorithms , CS100").unwrap();
        let course = &courses[0];
        assert_eq!(course.number(), " CS300 ");
        assert_eq!(course.title(), " Algorithms ");
        assert_eq!(course.prerequisites(), [" CS100"]);
    }

    #[test]
    fn duplicate_prerequisites_are_kept() {
        let courses = parse("CS300,Algorithms,CS100,CS100").unwrap();
        assert_eq!(courses[0].prerequisites(), ["CS100", "CS100"]);
    }

    #[test]
    fn number_case_is_preserved() {
        let courses = parse("cs100,intro").unwrap();
        assert_eq!(courses[0].number(), "cs100");
    }

    #[test]
    fn single_field_is_malformed() {
        let error = parse("CS100,Intro to CS\nCS499\nCS500").unwrap_err();

        match error {
            LoadError::MalformedRecord { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "CS499");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn stops_at_first_malformed_line() {
        let error = parse("CS100\n\nCS200").unwrap_err();
        assert!(matches!(
            error,
            LoadError::MalformedRecord { line: 1, ref text } if text == "CS100"
        ));
    }

    #[test]
    fn malformed_line_text_excludes_carriage_return() {
        let error = parse("CS100,Intro\r\nCS499\r\n").unwrap_err();
        assert!(matches!(
            error,
            LoadError::MalformedRecord { line: 2, ref text } if text == "CS499"
        ));
    }

    #[test]
    fn crlf_counts_as_one_line_break() {
        let error = parse("CS100,Intro\r\nCS200,DS\r\nCS499").unwrap_err();
        assert!(matches!(error, LoadError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn carriage_return_ends_a_line() {
        let error = parse("CS100,Intro\rCS499").unwrap_err();
        assert!(matches!(
            error,
            LoadError::MalformedRecord { line: 2, ref text } if text == "CS499"
        ));
    }

    #[test]
    fn custom_delimiter() {
        let parser = CsvParser::new('|');
        let courses = parser.parse("CS200|Data Structures, Part I|CS100").unwrap();

        assert_eq!(parser.delimiter(), '|');
        assert_eq!(courses[0].title(), "Data Structures, Part I");
        assert_eq!(courses[0].prerequisites(), ["CS100"]);
    }
}
