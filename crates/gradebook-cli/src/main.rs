use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gradebook_core::{codec, report, Report, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod menu;
mod prompt;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Student record manager with ranked score reports", version)]
struct Args {
    /// Path to the student data file
    #[arg(
        short,
        long,
        default_value = gradebook_core::DEFAULT_DATA_FILE,
        env = "GRADEBOOK_FILE"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load the data file, print the ranked report, and exit
    Report,

    /// Load the data file and export the ranked report
    Export {
        /// Output path; defaults to stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[arg(long, short, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Tsv,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gradebook_cli=info".parse()?)
                .add_directive("gradebook_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        None => menu::run(&args.file),
        Some(Command::Report) => run_report(&args.file),
        Some(Command::Export { output, format }) => run_export(&args.file, output, format),
    }
}

fn load_report(file: &Path) -> Result<Option<Report>> {
    let mut store = Store::new();
    let count = codec::load(&mut store, file)?;
    info!("Read {} records", count);
    Ok(Report::generate(&store))
}

fn run_report(file: &Path) -> Result<()> {
    match load_report(file)? {
        Some(report) => println!("{}", report::render_table(&report)),
        None => println!("No student records to report."),
    }
    Ok(())
}

fn run_export(file: &Path, output: Option<PathBuf>, format: ExportFormat) -> Result<()> {
    let Some(generated) = load_report(file)? else {
        println!("No student records to export.");
        return Ok(());
    };

    match (format, output) {
        (ExportFormat::Tsv, Some(path)) => {
            report::write_tsv(&generated, &path)?;
            println!("Exported {} rows to {}", generated.len(), path.display());
        }
        (ExportFormat::Tsv, None) => println!("{}", report::to_tsv(&generated)),
        (ExportFormat::Json, Some(path)) => {
            report::write_json(&generated, &path)?;
            println!("Exported {} rows to {}", generated.len(), path.display());
        }
        (ExportFormat::Json, None) => println!("{}", report::to_json(&generated)?),
    }

    Ok(())
}
