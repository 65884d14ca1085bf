//! Command-line front end: compare two text files and print their similarity.
//!
//! ```text
//! runsplit [OPTIONS] <LEFT> <RIGHT>
//! ```
//!
//! Settings come from an optional JSON file (`--config`) and are then
//! overridden by individual flags. Logs go to stderr and honour `RUST_LOG`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use runsplit::html::HtmlWriter;
use runsplit::sink::Transcript;
use runsplit::{Comparator, CompareConfig, DiffSink, EventType, Range, Sequence, Side, Strategy, Tokenizer};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Compare(#[from] runsplit::Error),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot encode report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

fn command() -> Command {
    return Command::new("runsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Similarity of two text files by recursive longest-run splitting")
        .arg(
            Arg::new("left")
                .value_name("LEFT")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("right")
                .value_name("RIGHT")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .value_name("NAME")
                .help("Largest-run locator: dense, rolling or sparse")
                .value_parser(|s: &str| s.parse::<Strategy>()),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .short('t')
                .value_name("UNIT")
                .help("How files are split into tokens: lines, words or blocks")
                .default_value("lines")
                .value_parser(|s: &str| s.parse::<Tokenizer>()),
        )
        .arg(
            Arg::new("min-block")
                .long("min-block")
                .value_name("N")
                .help("Treat common runs shorter than N tokens as differences")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("min-expectation")
                .long("min-expectation")
                .value_name("RATIO")
                .help("Skip the comparison when the similarity cannot reach RATIO")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Read settings from a JSON file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .value_name("FILE")
                .help("Write an HTML rendering of the diff to FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON report with the full transcript")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("More logging; repeat for trace output")
                .action(ArgAction::Count),
        );
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "runsplit=debug",
        _ => "runsplit=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<CompareConfig, CliError> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let text = read(path)?;
            serde_json::from_str(&text).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => CompareConfig::default(),
    };

    if let Some(strategy) = matches.get_one::<Strategy>("strategy") {
        config.strategy = *strategy;
    }
    if let Some(min_block_size) = matches.get_one::<usize>("min-block") {
        config.min_block_size = *min_block_size;
    }
    if let Some(min_expectation) = matches.get_one::<f64>("min-expectation") {
        config.min_expectation = *min_expectation;
    }
    config.validate()?;
    return Ok(config);
}

fn read(path: &Path) -> Result<String, CliError> {
    return fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    });
}

fn load_sequence(path: &Path, tokenizer: Tokenizer) -> Result<Sequence<String>, CliError> {
    let text = read(path)?;
    let sequence = tokenizer.tokenize(&text).with_label(path.display().to_string());
    tracing::debug!(path = %path.display(), tokens = sequence.len(), %tokenizer, "loaded");
    return Ok(sequence);
}

/// Forwards every event to two sinks.
struct Both<A, B>(A, B);

impl<T, A: DiffSink<T>, B: DiffSink<T>> DiffSink<T> for Both<A, B> {
    fn on_before_start(&mut self) {
        self.0.on_before_start();
        self.1.on_before_start();
    }

    fn handle(&mut self, sequence: &Sequence<T>, range: Range, event: EventType, side: Side) {
        self.0.handle(sequence, range, event, side);
        self.1.handle(sequence, range, event, side);
    }

    fn on_done(&mut self, similarity: f64) {
        self.0.on_done(similarity);
        self.1.on_done(similarity);
    }
}

#[derive(Serialize)]
struct Report<'a> {
    left: &'a Path,
    right: &'a Path,
    config: CompareConfig,
    similarity: f64,
    skipped: bool,
    transcript: &'a Transcript,
}

/// Run one comparison, printing the result to `out`.
fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<(), CliError> {
    let config = load_config(matches)?;

    // Both paths are required arguments.
    let (Some(left), Some(right)) = (
        matches.get_one::<PathBuf>("left"),
        matches.get_one::<PathBuf>("right"),
    ) else {
        return Ok(());
    };
    let tokenizer = matches
        .get_one::<Tokenizer>("tokens")
        .copied()
        .unwrap_or_default();

    let a = load_sequence(left, tokenizer)?;
    let b = load_sequence(right, tokenizer)?;

    let skipped = Comparator::similarity_ceiling(a.len(), b.len()) < config.min_expectation;
    let html = matches.get_one::<PathBuf>("html");
    if let (true, Some(path)) = (skipped, html) {
        tracing::warn!(
            path = %path.display(),
            min_expectation = config.min_expectation,
            "comparison skipped, no HTML written"
        );
    }

    let mut transcript = Transcript::new();
    let similarity = match html {
        Some(path) if !skipped => {
            let file = File::create(path).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            let title = format!("{} vs {}", left.display(), right.display());
            let mut sinks = Both(&mut transcript, HtmlWriter::new(BufWriter::new(file)).title(title));
            let similarity = config.compare(&a, &b, &mut sinks)?;
            sinks.1.finish().map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            similarity
        }
        _ => config.compare(&a, &b, &mut transcript)?,
    };

    if matches.get_flag("json") {
        let report = Report {
            left,
            right,
            config,
            similarity,
            skipped,
            transcript: &transcript,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{similarity}")?;
    }
    return Ok(());
}

fn main() -> ExitCode {
    let matches = command().get_matches();
    init_logging(matches.get_count("verbose"));

    return match run(&matches, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("runsplit: {err}");
            ExitCode::FAILURE
        }
    };
}
