use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use grade_aggregator::check::check_courses;
use grade_aggregator::import::{export_document, load_courses};
use grade_aggregator::{compute_gpa, report, CourseFactory, CourseType, UuidIds};

#[derive(Parser)]
#[command(name = "gpa-calc", version)]
#[command(about = "Weighted course grade and GPA calculator (0-20 scale)", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence when set)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute course grades and the weighted GPA
    Compute {
        /// Course list as JSON (array or exported document) or CSV
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, env = "GPA_CALC_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Heading for the markdown report
        #[arg(long)]
        title: Option<String>,
    },
    /// List suspicious input values without computing anything
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write courses as a calculator export document (JSON)
    Export {
        /// Course list as JSON (array or exported document) or CSV
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Print blank courses as JSON
    NewCourse {
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long = "type", default_value_t = CourseType::Exam)]
        course_type: CourseType,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "grade_aggregator=debug,gpa_calc=debug"
    } else {
        "grade_aggregator=warn,gpa_calc=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute {
            input,
            format,
            out,
            title,
        } => {
            let courses = load_courses(&input)?;
            for issue in check_courses(&courses) {
                tracing::warn!("{issue}");
            }

            let result = compute_gpa(&courses);
            let rendered = match format {
                OutputFormat::Text => report::render_text(&result),
                OutputFormat::Markdown => report::render_markdown(
                    title.as_deref(),
                    chrono::Local::now().date_naive(),
                    &result,
                ),
                OutputFormat::Json => report::render_json(&result)?,
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Report written to {}.", path.display());
                }
                None => print!("{rendered}"),
            }
        }
        Commands::Check { input } => {
            let courses = load_courses(&input)?;
            let issues = check_courses(&courses);

            if issues.is_empty() {
                println!("{} courses checked, no issues.", courses.len());
                return Ok(());
            }

            for issue in issues.iter() {
                println!("- {issue}");
            }
            anyhow::bail!("{} issues found in {}", issues.len(), input.display());
        }
        Commands::Export {
            input,
            out,
            name,
            description,
        } => {
            let courses = load_courses(&input)?;
            let document = export_document(&courses, name.as_deref(), description.as_deref())?;
            std::fs::write(&out, document)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Exported {} courses to {}.", courses.len(), out.display());
        }
        Commands::NewCourse { count, course_type } => {
            let mut factory = CourseFactory::new(UuidIds);
            let courses: Vec<_> = (0..count)
                .map(|_| factory.blank_course().with_course_type(course_type))
                .collect();
            println!("{}", serde_json::to_string_pretty(&courses)?);
        }
    }

    Ok(())
}
