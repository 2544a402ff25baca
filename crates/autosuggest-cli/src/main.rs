use std::collections::BTreeMap;
use std::io::{BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use autosuggest_core::{
    compute_suggestions_with, load_candidates, read_candidates, AppConfig, AutosuggestError,
    ExitCode, LogConfig, PlainTextRenderer, Renderer, SuggestionSet,
};
use autosuggest_tui::app::App;

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "autosuggest",
    about = "Type-ahead picker: filter a list as you type, pick with the arrow keys",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output in JSON format.
    /// Also enabled by setting AUTOSUGGEST_JSON=1.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one candidate interactively; prints it to stdout.
    Pick {
        /// File with one candidate per line (default: stdin).
        #[arg(long, short)]
        candidates: Option<PathBuf>,
    },

    /// Print the suggestions for a query.
    Suggest {
        query: String,
        /// File with one candidate per line (default: stdin).
        #[arg(long, short)]
        candidates: Option<PathBuf>,
        /// Override `suggest.max_suggestions`.
        #[arg(long)]
        limit: Option<usize>,
        /// Override `suggest.min_query_len`.
        #[arg(long)]
        min_len: Option<usize>,
    },

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

// ─── Config Actions ──────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path.
    Path,
    /// Show all config values.
    Show,
    /// Get a specific config key.
    Get { key: String },
    /// Write a config file with default values.
    Init {
        #[arg(long)]
        force: bool,
    },
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<AutosuggestError>()
            .map(|e| e.exit_code())
            .unwrap_or(ExitCode::GeneralError);
        std::process::exit(code as i32);
    }
}

fn run() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    // ── Env var overrides ──────────────────────────────────────────────────
    let json_output = cli.json || std::env::var("AUTOSUGGEST_JSON").as_deref() == Ok("1");

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);

    let interactive = matches!(cli.command, None | Some(Commands::Pick { .. }));
    init_logging(&config.log, interactive)?;

    match cli.command {
        None => pick(config, None)?,
        Some(Commands::Pick { candidates }) => pick(config, candidates.as_deref())?,

        Some(Commands::Suggest {
            query,
            candidates,
            limit,
            min_len,
        }) => {
            let candidates = candidate_list(candidates.as_deref())?;
            let mut options = config.suggest_options();
            if let Some(limit) = limit {
                options.max_suggestions = limit;
            }
            if let Some(min_len) = min_len {
                options.min_query_len = min_len;
            }

            let set = compute_suggestions_with(&query, &candidates, options);
            let dur = start.elapsed().as_millis();

            if json_output {
                print_json(&suggest_json(&query, &set, candidates.len(), dur))?;
            } else {
                print!("{}", suggest_text(&query, &set));
            }
        }

        Some(Commands::Config { action }) => {
            let dur = start.elapsed().as_millis();
            match action {
                ConfigAction::Path => {
                    if json_output {
                        print_json(&serde_json::json!({"status":"ok","data":config_path,"meta":{"duration_ms":dur}}))?;
                    } else {
                        println!("{}", config_path.display());
                    }
                }
                ConfigAction::Show => {
                    let kv = config_key_values(&config);
                    if json_output {
                        print_json(&serde_json::json!({"status":"ok","data":kv,"meta":{"duration_ms":dur}}))?;
                    } else {
                        for (k, v) in &kv {
                            println!("{k} = {v}");
                        }
                    }
                }
                ConfigAction::Get { key } => {
                    let kv = config_key_values(&config);
                    match kv.get(key.as_str()) {
                        Some(val) => {
                            if json_output {
                                print_json(&serde_json::json!({"status":"ok","data":{"key":key,"value":val},"meta":{"duration_ms":dur}}))?;
                            } else {
                                println!("{val}");
                            }
                        }
                        None => {
                            eprintln!("Unknown config key: {key}");
                            std::process::exit(ExitCode::NotFound as i32);
                        }
                    }
                }
                ConfigAction::Init { force } => {
                    if config_path.exists() && !force {
                        eprintln!(
                            "Config already exists at {} (use --force to overwrite)",
                            config_path.display()
                        );
                        std::process::exit(ExitCode::InvalidArgs as i32);
                    }
                    match &cli.config {
                        Some(path) => AppConfig::default().save_to(path)?,
                        None => AppConfig::default().save()?,
                    }
                    println!("Wrote {}", config_path.display());
                }
            }
        }
    }

    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn pick(config: AppConfig, candidates: Option<&Path>) -> Result<()> {
    let candidates = candidate_list(candidates)?;
    let mut app = App::new(config, candidates);

    match autosuggest_tui::run_picker(&mut app)? {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => {
            tracing::info!("picker closed without a value");
            std::process::exit(ExitCode::NothingSelected as i32);
        }
    }
}

/// Candidates from a file, or from stdin when it is piped.
fn candidate_list(path: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = path {
        return Ok(load_candidates(path)?);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("no candidates: pass --candidates FILE or pipe a list on stdin");
    }
    candidates_from_reader(stdin.lock(), "stdin")
}

/// Candidates from a piped source; an empty source is an error.
fn candidates_from_reader<R: BufRead>(reader: R, source: &str) -> Result<Vec<String>> {
    let candidates =
        read_candidates(reader).with_context(|| format!("reading candidates from {source}"))?;
    if candidates.is_empty() {
        return Err(AutosuggestError::EmptyCandidates(source.to_string()).into());
    }
    Ok(candidates)
}

/// JSON envelope for `suggest --json`.
fn suggest_json(
    query: &str,
    set: &SuggestionSet<String>,
    total_candidates: usize,
    duration_ms: u128,
) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "data": {
            "query": query,
            "items": set,
            "selected": set.selected_index(),
            "total_candidates": total_candidates,
        },
        "meta": { "duration_ms": duration_ms }
    })
}

/// Plain output for `suggest`: one row per suggestion, or a notice line.
fn suggest_text(query: &str, set: &SuggestionSet<String>) -> String {
    if set.is_empty() {
        return format!("No suggestions for: {query}\n");
    }
    let mut renderer = PlainTextRenderer::new();
    renderer.render(set);
    renderer.output().to_string()
}

/// `None` means logging is off.
fn parse_level(level: &str) -> Result<Option<tracing::Level>> {
    if level.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    let level = level
        .parse()
        .map_err(|_| AutosuggestError::ConfigError(format!("bad log level: {level}")))?;
    Ok(Some(level))
}

enum LogTarget {
    File(std::fs::File),
    Stderr,
    Nowhere,
}

/// Where log lines go. The interactive picker owns the terminal, so it only
/// logs to a file. A log file that cannot be opened is reported back and
/// replaced by the sink used when no file is configured.
fn log_target(file: Option<&str>, interactive: bool) -> (LogTarget, Option<String>) {
    let fallback = if interactive {
        LogTarget::Nowhere
    } else {
        LogTarget::Stderr
    };
    let Some(file) = file else {
        return (fallback, None);
    };
    match std::fs::OpenOptions::new().create(true).append(true).open(file) {
        Ok(handle) => (LogTarget::File(handle), None),
        Err(err) => (fallback, Some(format!("cannot open log file {file}: {err}"))),
    }
}

/// Install the tracing subscriber described by `[log]`.
fn init_logging(log: &LogConfig, interactive: bool) -> Result<()> {
    let Some(level) = parse_level(&log.level)? else {
        return Ok(());
    };

    let (target, problem) = log_target(log.file.as_deref(), interactive);
    match target {
        LogTarget::File(file) => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::Nowhere => {}
    }

    if let Some(problem) = problem {
        if interactive {
            eprintln!("Warning: {problem}");
        }
        tracing::warn!("{problem}");
    }
    Ok(())
}

fn print_json(val: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}

fn config_key_values(config: &AppConfig) -> BTreeMap<&'static str, String> {
    let mut map = BTreeMap::new();
    map.insert("suggest.min_query_len", config.suggest.min_query_len.to_string());
    map.insert("suggest.max_suggestions", config.suggest.max_suggestions.to_string());
    map.insert("ui.tick_rate_ms", config.ui.tick_rate_ms.to_string());
    map.insert("ui.prompt", config.ui.prompt.clone());
    map.insert("ui.show_hints", config.ui.show_hints.to_string());
    map.insert("log.level", config.log.level.clone());
    map.insert("log.file", config.log.file.clone().unwrap_or_default());
    map
}
