use std::path::PathBuf;

use catalog::{Catalog, Config, Course};
use clap::Parser;
use tracing::instrument;

use super::terminal::Style;

#[derive(Debug, Parser)]
#[command(about = "Print every course in order of course number")]
pub struct List {
    /// The catalog file (defaults to the configured source)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,

    /// Suppress the heading and colors for scripting
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_catalog(config, self.file)?;

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(&catalog, self.quiet),
            OutputFormat::Json => Self::output_json(&catalog)?,
        }

        Ok(())
    }

    fn output_pretty(catalog: &Catalog, quiet: bool) {
        if quiet {
            catalog.for_each_in_order(|course| println!("{course}"));
            return;
        }

        if catalog.is_empty() {
            println!("{}", super::EMPTY_CATALOG.warning());
            return;
        }

        println!("{}", "Available courses:".dim());
        println!();
        catalog.for_each_in_order(|course| {
            println!("{}, {}", course.number().course_number(), course.title());
        });
    }

    fn output_json(catalog: &Catalog) -> anyhow::Result<()> {
        let courses: Vec<&Course> = catalog.courses().collect();
        println!("{}", serde_json::to_string_pretty(&courses)?);
        Ok(())
    }
}
