//! Interactive menu
//!
//! The menu loop reads from any [`BufRead`] and writes to any [`Write`], so the
//! same session drives a terminal or an in-memory buffer.

use std::{
    fmt,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use catalog::{Catalog, Config};
use clap::Parser;
use tracing::instrument;

#[derive(Debug, Default, Parser)]
#[command(about = "Browse the catalog interactively")]
pub struct Menu {
    /// The catalog file offered when loading (defaults to the configured
    /// source)
    file: Option<PathBuf>,
}

impl Menu {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let default_file = self.file.unwrap_or_else(|| config.source.clone());
        let stdin = io::stdin();
        let stdout = io::stdout();

        Session::new(config, default_file, stdin.lock(), stdout.lock()).run()?;
        Ok(())
    }
}

/// The options offered on each pass of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    LoadData = 1,
    PrintCourseList = 2,
    PrintCourse = 3,
    Exit = 9,
}

impl MenuOption {
    const ALL: [Self; 4] = [
        Self::LoadData,
        Self::PrintCourseList,
        Self::PrintCourse,
        Self::Exit,
    ];

    fn from_selection(input: &str) -> Option<Self> {
        let selection: u8 = input.trim().parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|option| *option as u8 == selection)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::LoadData => "Load data structure",
            Self::PrintCourseList => "Print course list",
            Self::PrintCourse => "Print course",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", *self as u8, self.label())
    }
}

/// A single interactive session over one catalog.
struct Session<'a, R, W> {
    config: &'a Config,
    default_file: PathBuf,
    catalog: Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    fn new(config: &'a Config, default_file: PathBuf, input: R, output: W) -> Self {
        Self {
            config,
            default_file,
            catalog: Catalog::new(config.parser()),
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course catalog!")?;

        loop {
            self.display_menu()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match MenuOption::from_selection(&line) {
                Some(MenuOption::LoadData) => self.load_data()?,
                Some(MenuOption::PrintCourseList) => self.print_course_list()?,
                Some(MenuOption::PrintCourse) => self.print_course()?,
                Some(MenuOption::Exit) => break,
                None => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{option}")?;
        }
        writeln!(self.output)?;
        self.prompt("Select an option: ")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads one line of input, without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn load_data(&mut self) -> io::Result<()> {
        let prompt = format!("Enter file name [{}]: ", self.default_file.display());
        self.prompt(&prompt)?;

        let path = match self.read_line()? {
            Some(line) if !line.trim().is_empty() => PathBuf::from(line.trim()),
            _ => self.default_file.clone(),
        };

        self.load_from(&path)
    }

    fn load_from(&mut self, path: &Path) -> io::Result<()> {
        match self.catalog.load_file(path) {
            Ok(count) => {
                tracing::info!("Loaded {count} courses from {}", path.display());
                writeln!(self.output, "Number of courses loaded: {count}")
            }
            Err(error) => writeln!(self.output, "Error loading catalog: {error}"),
        }
    }

    fn print_course_list(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return writeln!(self.output, "{}", super::EMPTY_CATALOG);
        }

        writeln!(self.output, "Available courses:")?;
        writeln!(self.output)?;
        for course in &self.catalog {
            writeln!(self.output, "{course}")?;
        }
        Ok(())
    }

    fn print_course(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return writeln!(self.output, "{}", super::EMPTY_CATALOG);
        }

        self.prompt("What course do you want to know about? ")?;
        let query = self.read_line()?.unwrap_or_default();
        let number = self.config.normalise_query(&query);

        if number.is_empty() {
            return writeln!(self.output, "Invalid course number.");
        }

        writeln!(self.output)?;
        match self.catalog.find_by_number(&number) {
            Some(course) => writeln!(self.output, "{}", course.details()),
            None => writeln!(self.output, "Course {number} not found."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    const SAMPLE: &str = "CS300,Algorithms,CS100,CS200\nCS100,Intro to CS\nCS200,Data Structures,CS100\n";

    struct Fixture {
        dir: TempDir,
        config: Config,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            std::fs::write(dir.path().join("CourseCatalog.csv"), SAMPLE).unwrap();
            Self {
                dir,
                config: Config::default(),
            }
        }

        fn catalog_path(&self) -> PathBuf {
            self.dir.path().join("CourseCatalog.csv")
        }

        /// Runs a session over `input` and returns everything written.
        fn run(&self, input: &str) -> String {
            let mut output = Vec::new();
            Session::new(
                &self.config,
                self.catalog_path(),
                Cursor::new(input.as_bytes()),
                &mut output,
            )
            .run()
            .unwrap();
            String::from_utf8(output).unwrap()
        }
    }

    #[test]
    fn menu_lists_options() {
        let output = Fixture::new().run("9\n");

        assert!(output.starts_with("Welcome to the course catalog!\n"));
        assert!(output.contains(
            "1. Load data structure\n2. Print course list\n3. Print course\n9. Exit\n"
        ));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits() {
        let output = Fixture::new().run("");
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn invalid_options_are_rejected() {
        let output = Fixture::new().run("4\nabc\n9\n");
        assert_eq!(output.matches("Invalid option. Please try again.").count(), 2);
    }

    #[test]
    fn empty_catalog_prompts_for_load() {
        let output = Fixture::new().run("2\n3\n9\n");
        assert_eq!(output.matches(super::super::EMPTY_CATALOG).count(), 2);
    }

    #[test]
    fn load_uses_default_file() {
        let output = Fixture::new().run("1\n\n9\n");
        assert!(output.contains("Number of courses loaded: 3"));
    }

    #[test]
    fn load_reports_missing_file() {
        let fixture = Fixture::new();
        let missing = fixture.dir.path().join("missing.csv");

        let output = fixture.run(&format!("1\n{}\n9\n", missing.display()));

        assert!(output.contains("Error loading catalog: File not found: "));
    }

    #[test]
    fn print_course_list_is_sorted() {
        let output = Fixture::new().run("1\n\n2\n9\n");
        assert!(output.contains(
            "Available courses:\n\nCS100, Intro to CS\nCS200, Data Structures\nCS300, Algorithms\n"
        ));
    }

    #[test]
    fn print_course_shows_prerequisites() {
        let output = Fixture::new().run("1\n\n3\ncs300\n9\n");
        assert!(output.contains("CS300, Algorithms\nPrerequisites: CS100, CS200\n"));
    }

    #[test]
    fn print_course_without_prerequisites() {
        let output = Fixture::new().run("1\n\n3\nCS100\n9\n");
        assert!(output.contains("CS100, Intro to CS\nPrerequisites: None\n"));
    }

    #[test]
    fn print_course_not_found() {
        let output = Fixture::new().run("1\n\n3\nCS999\n9\n");
        assert!(output.contains("Course CS999 not found."));
    }

    #[test]
    fn print_course_rejects_blank_number() {
        let output = Fixture::new().run("1\n\n3\n   \n9\n");
        assert!(output.contains("Invalid course number."));
    }

    #[test]
    fn failed_reload_keeps_previous_catalog() {
        let fixture = Fixture::new();
        let broken = fixture.dir.path().join("broken.csv");
        std::fs::write(&broken, "MATH201,Discrete Mathematics\nCS499\n").unwrap();

        let output = fixture.run(&format!("1\n\n1\n{}\n2\n9\n", broken.display()));

        assert!(output.contains("Error loading catalog: Malformed course on line 2: CS499"));
        assert!(output.contains("CS100, Intro to CS\nCS200, Data Structures\nCS300, Algorithms\n"));
        assert!(!output.contains("MATH201, Discrete Mathematics\n"));
    }

    #[test]
    fn option_from_selection() {
        assert_eq!(MenuOption::from_selection(" 1 "), Some(MenuOption::LoadData));
        assert_eq!(MenuOption::from_selection("9"), Some(MenuOption::Exit));
        assert_eq!(MenuOption::from_selection("0"), None);
        assert_eq!(MenuOption::from_selection("-1"), None);
    }
}
