//! Command-line interface for merger.
//!
//! Merges the content of textual files and directories into a single output
//! file. Progress and warnings go to stderr, the merged text to the output
//! file only.

use clap::{ArgAction, Parser, ValueEnum};
use merger::{MergeBuilder, MergeOptions, MergeReport, TextDetection, merge, normalize_inputs};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// Merge text files into one
#[derive(Parser)]
#[command(
    name = "merger",
    version,
    about = "Merges the content of textual files into a single output file.",
    long_about = "Merges the content of textual files into a single output file.\n\
                  Supports recursive directory traversal, path deduplication, and text-only filtering.",
    after_help = "Example:\n  merger -o out.txt notes.txt docs/ src/file.md",
    disable_version_flag = true
)]
struct Cli {
    /// Input files and directories
    #[arg(required = true, value_name = "FILES_AND_DIRECTORIES")]
    inputs: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Text detection strategy
    #[arg(long, value_enum, default_value_t = Detection::Heuristic)]
    detection: Detection,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Respect .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Directory header paths are relative to (default current dir)
    #[arg(long, value_name = "DIR")]
    relative_to: Option<PathBuf>,

    /// Print a JSON report of the run on stdout
    #[arg(long)]
    json: bool,

    /// Indent the JSON report
    #[arg(short, long, requires = "json")]
    pretty: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Detection {
    Heuristic,
    Inspector,
    None,
}

impl From<Detection> for TextDetection {
    fn from(d: Detection) -> Self {
        match d {
            Detection::Heuristic => TextDetection::Heuristic,
            Detection::Inspector => TextDetection::Inspector,
            Detection::None => TextDetection::None,
        }
    }
}

impl Cli {
    fn into_options(self) -> (Vec<PathBuf>, MergeOptions, bool, bool) {
        let mut builder = MergeBuilder::new(self.output)
            .detection(self.detection.into())
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.no_hidden)
            .follow_links(self.follow_links)
            .ignore_patterns(self.ignore_patterns);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };
        if let Some(base) = self.relative_to {
            builder = builder.display_base(base);
        }

        (self.inputs, builder.build(), self.json, self.pretty)
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let (inputs, options, json, pretty) = cli.into_options();

    let inputs = normalize_inputs(&inputs);
    if inputs.is_empty() {
        eprintln!("Error: no input files or directories specified.");
        eprintln!("Use -h for help.");
        exit(1);
    }

    match merge(&inputs, &options) {
        Ok(report) => {
            if json {
                print_report(&report, pretty);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &MergeReport, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    println!("{}", json);
}
