use std::{path::PathBuf, process};

use catalog::{Config, Course};
use clap::Parser;
use tracing::instrument;

use super::terminal::{is_narrow, Style};

#[derive(Debug, Parser)]
#[command(about = "Display a course and its prerequisites")]
pub struct Show {
    /// The course number to look up
    number: String,

    /// The catalog file (defaults to the configured source)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_catalog(config, self.file)?;

        if catalog.is_empty() {
            eprintln!("{}", super::EMPTY_CATALOG.warning());
            process::exit(1);
        }

        let number = config.normalise_query(&self.number);
        let Some(course) = catalog.find_by_number(&number) else {
            eprintln!("{}", format!("Course {number} not found.").warning());
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => output_pretty(course),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(course)?),
        }

        Ok(())
    }
}

fn output_pretty(course: &Course) {
    println!("{}, {}", course.number().course_number(), course.title());

    let prerequisites = course.prerequisites();
    if prerequisites.is_empty() {
        println!("{} {}", "Prerequisites:".dim(), "None".dim());
    } else if is_narrow() {
        println!("{}", "Prerequisites:".dim());
        for prerequisite in prerequisites {
            println!("  • {}", prerequisite.prerequisite());
        }
    } else {
        let joined = prerequisites
            .iter()
            .map(|p| p.prerequisite())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {joined}", "Prerequisites:".dim());
    }
}
