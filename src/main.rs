//! Mauka Match - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs one matching command
//! against a text file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use mauka_match_lib::config::{self, LogConfig, MatchConfig};
use mauka_match_lib::error::{
    report_error, set_error_reporter, ErrorContext, MaukaError, MaukaResult, TracingErrorReporter,
};
use mauka_match_lib::matching::{
    ApproximateAlgorithm, ExactAlgorithm, FullDynamicMatcher, PatternSet,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Mauka Match.
#[derive(Parser, Debug)]
#[clap(name = "mauka_match", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run every matcher over a text file and report match counts and timings
    Compare {
        /// Pattern to search for
        pattern: String,

        /// Text file to search
        #[clap(value_parser)]
        file: PathBuf,

        /// Edit budget for the approximate matchers
        #[clap(short = 'k', long)]
        edits: Option<usize>,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search a text file and print every match
    Search {
        /// Text file to search
        #[clap(value_parser)]
        file: PathBuf,

        /// Pattern to search for; may be repeated
        #[clap(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// Edit budget for approximate search
        #[clap(short = 'k', long)]
        edits: Option<usize>,

        /// Search for exact occurrences only
        #[clap(long)]
        exact: bool,

        /// Matching algorithm, overriding the configured one
        #[clap(short, long)]
        algorithm: Option<String>,

        /// Print the matches as JSON
        #[clap(long)]
        json: bool,
    },

    /// Render the edit table of one pattern against a short text
    Trace {
        /// Pattern to align
        pattern: String,

        /// Text to align against
        text: String,

        /// Edit budget
        #[clap(short = 'k', long)]
        edits: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One line of the `compare` report.
#[derive(Debug, Serialize)]
struct TimingReport {
    algorithm: &'static str,
    approximate: bool,
    matches: usize,
    elapsed_ms: f64,
}

/// Initialize the logging system. `RUST_LOG` takes precedence over the
/// configured level.
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn read_text(path: &Path) -> MaukaResult<String> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), symbols = text.chars().count(), "Loaded text");
    Ok(text)
}

fn compare(
    config: &MatchConfig,
    pattern: &str,
    file: &Path,
    edits: Option<usize>,
    json: bool,
) -> MaukaResult<()> {
    let text = read_text(file)?;
    let patterns = PatternSet::single(pattern)?;
    let max_edits = edits.unwrap_or(config.search.max_edits);
    let mut reports = Vec::new();

    for algorithm in ExactAlgorithm::ALL {
        let matcher = algorithm.build();
        let started = Instant::now();
        let matches = matcher.matches(&patterns, &text);
        reports.push(TimingReport {
            algorithm: matcher.name(),
            approximate: false,
            matches,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        });
    }

    for algorithm in ApproximateAlgorithm::ALL {
        let matcher = algorithm.build(config.edit_costs());
        let started = Instant::now();
        let matches = matcher.matches(&patterns, &text, max_edits);
        reports.push(TimingReport {
            algorithm: matcher.name(),
            approximate: true,
            matches,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let budget = if report.approximate {
                format!("k={max_edits}")
            } else {
                "exact".to_string()
            };
            println!(
                "{:<20} {:<6} {:>8} matches {:>12.3} ms",
                report.algorithm, budget, report.matches, report.elapsed_ms
            );
        }
    }
    Ok(())
}

struct SearchRequest<'a> {
    file: &'a Path,
    patterns: &'a [String],
    edits: Option<usize>,
    exact: bool,
    algorithm: Option<&'a str>,
    json: bool,
}

fn search(config: &MatchConfig, request: SearchRequest<'_>) -> MaukaResult<()> {
    let text = read_text(request.file)?;
    let patterns = PatternSet::new(request.patterns)?;

    if request.exact {
        let algorithm = match request.algorithm {
            Some(name) => name.parse::<ExactAlgorithm>()?,
            None => config.search.exact_algorithm,
        };
        let locations = algorithm.build().match_locations(&patterns, &text);
        info!(%algorithm, matches = locations.len(), "Exact search finished");

        if request.json {
            println!("{}", serde_json::to_string_pretty(&locations)?);
        } else {
            for end in locations {
                println!("{end}");
            }
        }
        return Ok(());
    }

    let algorithm = match request.algorithm {
        Some(name) => name.parse::<ApproximateAlgorithm>()?,
        None => config.search.approximate_algorithm,
    };
    let max_edits = request.edits.unwrap_or(config.search.max_edits);

    let excluded = patterns.excluded(max_edits);
    if config.search.warn_on_excluded_patterns && !excluded.is_empty() {
        warn!(
            max_edits,
            excluded = ?excluded,
            "Patterns no longer than the edit budget are not searched"
        );
    }

    let values = algorithm
        .build(config.edit_costs())
        .match_edit_values(&patterns, &text, max_edits);
    info!(%algorithm, max_edits, matches = values.len(), "Approximate search finished");

    if request.json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for (end, value) in values {
            println!("{end}\t{value}");
        }
    }
    Ok(())
}

fn trace(config: &MatchConfig, pattern: &str, text: &str, edits: Option<usize>) -> MaukaResult<()> {
    let max_edits = edits.unwrap_or(config.search.max_edits);
    let trace = FullDynamicMatcher::with_costs(config.edit_costs()).trace(pattern, text, max_edits)?;

    print!("{trace}");
    for (&end, &value) in trace.edit_values() {
        let start = trace.alignment_start(end).unwrap_or(end);
        let aligned: String = trace.text()[start..end].iter().collect();
        println!("end={end} edits={value} start={start} text={aligned:?}");
    }
    Ok(())
}

fn run(command: Command, config: &MatchConfig) -> MaukaResult<()> {
    match command {
        Command::Compare {
            pattern,
            file,
            edits,
            json,
        } => compare(config, &pattern, &file, edits, json),
        Command::Search {
            file,
            patterns,
            edits,
            exact,
            algorithm,
            json,
        } => search(
            config,
            SearchRequest {
                file: &file,
                patterns: &patterns,
                edits,
                exact,
                algorithm: algorithm.as_deref(),
                json,
            },
        ),
        Command::Trace {
            pattern,
            text,
            edits,
        } => trace(config, &pattern, &text, edits),
        Command::Validate => {
            let costs = config.edit_costs();
            if !costs.admits_partitioning(config.search.max_edits) {
                warn!(
                    max_edits = config.search.max_edits,
                    "Configured costs let the partitioned matcher miss matches"
                );
            }
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            let toml = toml::to_string_pretty(&MatchConfig::default())?;
            fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = match args.command {
        // Generating a configuration must not depend on the current one
        Command::GenConfig { .. } => Ok(MatchConfig::default()),
        _ => config::load_config(args.config.as_deref()),
    };

    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("{error}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let result = loaded
        .map_err(MaukaError::from)
        .and_then(|config| run(args.command, &config));

    if let Err(error) = result {
        let component = match error {
            MaukaError::Config(_) => "config",
            MaukaError::Match(_) => "matching",
            _ => "cli",
        };
        report_error(ErrorContext::new(error, component));
        process::exit(1);
    }
}
