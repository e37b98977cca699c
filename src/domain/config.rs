use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::{csv::DEFAULT_DELIMITER, CsvParser};

/// Configuration for the course catalog.
///
/// Controls how catalog files are located and parsed, and how course numbers
/// typed by a user are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The character separating fields on each line of the catalog file.
    delimiter: char,

    /// Whether course numbers entered by a user are upper-cased before lookup.
    ///
    /// Stored course numbers are never normalised, so this only helps when
    /// the catalog itself uses upper-case numbers.
    pub uppercase_queries: bool,

    /// The catalog file used when none is given on the command line.
    pub source: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            uppercase_queries: true,
            source: default_source(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Returns the field delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns a parser for catalog files using the configured delimiter.
    #[must_use]
    pub const fn parser(&self) -> CsvParser {
        CsvParser::new(self.delimiter)
    }

    /// Normalises a course number typed by a user.
    ///
    /// Surrounding whitespace is removed, and the number is upper-cased if
    /// `uppercase_queries` is set.
    #[must_use]
    pub fn normalise_query(&self, query: &str) -> String {
        let query = query.trim();
        if self.uppercase_queries {
            query.to_uppercase()
        } else {
            query.to_string()
        }
    }
}

const fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

const fn default_uppercase_queries() -> bool {
    true
}

fn default_source() -> PathBuf {
    PathBuf::from("CourseCatalog.csv")
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_delimiter")]
        delimiter: char,

        #[serde(default = "default_uppercase_queries")]
        uppercase_queries: bool,

        #[serde(default = "default_source")]
        source: PathBuf,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                delimiter,
                uppercase_queries,
                source,
            } => Self {
                delimiter,
                uppercase_queries,
                source,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            delimiter: config.delimiter,
            uppercase_queries: config.uppercase_queries,
            source: config.source,
        }
    }
}
