use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use task_rank::config::Config;
use task_rank::report::{AnalyzeReport, MatrixReport, SuggestReport};
use task_rank::scoring::Strategy;
use task_rank::task::TaskRequest;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_SERVER: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Table,
    Json,
    Tsv,
}

#[derive(Args, Debug, Default)]
struct InputArgs {
    /// JSON file with tasks: an array, or {"tasks": [...], "strategy": "..."}.
    /// Reads stdin if omitted or "-"
    file: Option<PathBuf>,

    /// Ranking strategy: smart_balance, fastest_wins, high_impact, deadline_driven
    #[arg(short, long)]
    strategy: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every task (default if no subcommand)
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show only the top of the ranking
    Suggest {
        #[command(flatten)]
        input: InputArgs,

        /// How many tasks to show (defaults to suggestion_limit from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Sort tasks into Eisenhower quadrants (urgent: due within 3 days, important: 7+)
    Matrix {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Serve the ranking API over HTTP
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "task-rank")]
#[command(about = "Task prioritization CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/task-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    task_rank::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Analyze {
        input: InputArgs::default(),
        output: None,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let mut config = match task_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if cli.today.is_some() {
        config.today = cli.today;
    }

    // Validate config at startup
    if let Err(errors) = task_rank::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Err(e) = task_rank::http::serve(config).await {
                eprintln!("Server error: {:#}", e);
                std::process::exit(EXIT_SERVER);
            }
        }
        Commands::Analyze { input, output } => {
            let start_time = Instant::now();
            let (request, strategy) = load_request(&input, &config);
            let report = task_rank::report::analyze(&request.tasks, strategy, config.today());

            if let Some(path) = output {
                if let Err(e) = task_rank::output::save_report(&path, &report) {
                    eprintln!("Failed to write report: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }

            print_analyze(&report, input.format, cli.verbose);
            tracing::debug!("Ranked {} tasks in {:?}", report.results.len(), start_time.elapsed());
        }
        Commands::Suggest { input, limit } => {
            let (request, strategy) = load_request(&input, &config);
            let limit = limit.unwrap_or(config.suggestion_limit);
            let report =
                task_rank::report::suggest(&request.tasks, strategy, config.today(), limit);
            print_suggest(&report, input.format, cli.verbose);
        }
        Commands::Matrix { input } => {
            let (request, _) = load_request(&input, &config);
            let report = task_rank::report::matrix(&request.tasks, config.today());
            print_matrix(&report, input.format);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Read and decode the task set, exiting on bad input
fn load_request(input: &InputArgs, config: &Config) -> (TaskRequest, Strategy) {
    let request = match read_input(input.file.as_deref())
        .and_then(|body| task_rank::task::parse_payload_bytes(&body))
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    // Flag beats payload, payload beats config
    let requested = input.strategy.as_deref().or(request.strategy.as_deref());
    if let Some(name) = requested {
        if Strategy::lookup(name).is_none() {
            tracing::warn!("Unknown strategy '{}', using {}", name, Strategy::default());
        }
    }
    let strategy = config.strategy_for(requested);
    tracing::debug!("Loaded {} tasks, strategy {}", request.tasks.len(), strategy);

    (request, strategy)
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read(path)
            .with_context(|| format!("Failed to read tasks from {}", path.display())),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read tasks from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(report: &T) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize report: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn print_analyze(report: &AnalyzeReport, format: Format, verbose: bool) {
    let use_colors = task_rank::output::should_use_colors();
    match format {
        Format::Json => print_json(report),
        Format::Tsv => {
            if let Some(ref warning) = report.warning {
                eprintln!("{}", task_rank::output::format_warning(warning, false));
            }
            println!("{}", task_rank::output::format_tsv(&report.results));
        }
        Format::Table => {
            if let Some(ref warning) = report.warning {
                println!("{}", task_rank::output::format_warning(warning, use_colors));
            }
            print_ranked(&report.results, use_colors, verbose);
        }
    }
}

fn print_suggest(report: &SuggestReport, format: Format, verbose: bool) {
    let use_colors = task_rank::output::should_use_colors();
    match format {
        Format::Json => print_json(report),
        Format::Tsv => println!("{}", task_rank::output::format_tsv(&report.suggestions)),
        Format::Table => print_ranked(&report.suggestions, use_colors, verbose),
    }
}

fn print_matrix(report: &MatrixReport, format: Format) {
    match format {
        Format::Json => print_json(report),
        Format::Tsv => println!("{}", task_rank::output::format_matrix_tsv(report)),
        Format::Table => {
            let use_colors = task_rank::output::should_use_colors();
            println!("{}", task_rank::output::format_matrix(report, use_colors));
        }
    }
}

fn print_ranked(tasks: &[task_rank::ScoredTask], use_colors: bool, verbose: bool) {
    if verbose && !tasks.is_empty() {
        // Verbose mode: detailed output per task
        for scored in tasks {
            println!("{}", task_rank::output::format_task_detail(scored, use_colors));
            println!();
        }
    } else {
        println!("{}", task_rank::output::format_scored_table(tasks, use_colors));
    }
}
