//! sortscope command-line interface.
//!
//! Provides the `sortscope` binary with subcommands to list the available
//! algorithms, dump a step list as JSON, verify a trace, and animate a trace
//! in the terminal.
//!
//! Exit codes: 0 = success, 1 = invalid input, 2 = trace verification
//! failure, 3 = I/O error.

mod render;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use sortscope_core::{parse_numbers, parse_target, random_dataset, Algorithm, DatasetConfig, StepRecord};
use sortscope_player::{AutoPlay, DisplayMode, PlaybackConfig, Player};
use sortscope_steps::{fingerprint, generate, verify_trace};

/// Step-by-step sorting and searching visualizer.
#[derive(Parser)]
#[command(name = "sortscope", about = "Step-by-step sorting and searching visualizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the available algorithms.
    List,

    /// Print the step list of one run as JSON.
    Steps {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Check a trace against the step-record contract.
    Verify {
        #[command(flatten)]
        input: InputArgs,

        /// Verify a JSON step list from this file instead of generating one.
        #[arg(long)]
        trace: Option<PathBuf>,
    },

    /// Animate a run in the terminal.
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Milliseconds per step (100..=2000, default: $SORTSCOPE_SPEED_MS or 300).
        #[arg(long)]
        speed_ms: Option<u64>,

        /// Display mode: bars, scatter or tree.
        #[arg(short, long, default_value = "bars")]
        mode: String,
    },
}

/// Algorithm and dataset selection shared by every run subcommand.
#[derive(Args)]
struct InputArgs {
    /// Algorithm: bubble, insertion, selection, quick, merge, linear, binary.
    #[arg(short, long)]
    algorithm: String,

    /// Comma-separated numbers (default: a random dataset).
    #[arg(short, long)]
    data: Option<String>,

    /// Search target (required for linear and binary search).
    #[arg(short, long)]
    target: Option<String>,

    /// Length of the random dataset (default: $SORTSCOPE_DATASET_LEN or 10).
    #[arg(long)]
    len: Option<usize>,

    /// Seed for the random dataset (default: $SORTSCOPE_SEED or random).
    #[arg(long)]
    seed: Option<u64>,
}

/// A validated run request.
struct Run {
    algorithm: Algorithm,
    input: Vec<f64>,
    target: Option<f64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::List => run_list(),
        Commands::Steps { input, pretty } => run_steps(&input, pretty),
        Commands::Verify { input, trace } => run_verify(&input, trace),
        Commands::Play {
            input,
            speed_ms,
            mode,
        } => run_play(&input, speed_ms, &mode),
    };
    process::exit(exit_code);
}

fn run_list() -> i32 {
    for algorithm in Algorithm::ALL {
        let note = if algorithm.requires_sorted_input() {
            " (sorts its input first)"
        } else {
            ""
        };
        println!(
            "{:<10} {:<15} {}{}",
            algorithm.slug(),
            algorithm.display_name(),
            algorithm.kind(),
            note
        );
    }
    0
}

/// Execute the steps subcommand.
fn run_steps(args: &InputArgs, pretty: bool) -> i32 {
    let run = match prepare(args) {
        Ok(run) => run,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let steps = match generate(run.algorithm, &run.input, run.target) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let output = serde_json::json!({
        "algorithm": run.algorithm,
        "input": run.input,
        "target": run.target,
        "fingerprint": fingerprint(&steps).to_hex().to_string(),
        "steps": steps,
    });
    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    match json {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize steps: {}", e);
            3
        }
    }
}

/// Execute the verify subcommand.
///
/// Prints a JSON report to stdout and returns 2 when the trace has
/// violations.
fn run_verify(args: &InputArgs, trace: Option<PathBuf>) -> i32 {
    let run = match prepare(args) {
        Ok(run) => run,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let steps = match trace {
        Some(path) => match load_trace(&path) {
            Ok(steps) => steps,
            Err((code, msg)) => {
                eprintln!("Error: {}", msg);
                return code;
            }
        },
        None => match generate(run.algorithm, &run.input, run.target) {
            Ok(steps) => steps,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
    };

    let violations = verify_trace(run.algorithm, &run.input, run.target, &steps);
    let report = serde_json::json!({
        "algorithm": run.algorithm,
        "steps": steps.len(),
        "fingerprint": fingerprint(&steps).to_hex().to_string(),
        "violations": violations,
    });
    println!("{}", report);

    if violations.is_empty() {
        0
    } else {
        eprintln!("Trace failed verification with {} violation(s)", violations.len());
        2
    }
}

/// Execute the play subcommand.
fn run_play(args: &InputArgs, speed_ms: Option<u64>, mode: &str) -> i32 {
    let mode: DisplayMode = match mode.parse() {
        Ok(mode) => mode,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };
    let run = match prepare(args) {
        Ok(run) => run,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };
    let steps = match generate(run.algorithm, &run.input, run.target) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mut player = match Player::new(run.algorithm, run.input, steps, PlaybackConfig::from_env()) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if let Some(ms) = speed_ms {
        if let Err(e) = player.set_speed(ms) {
            eprintln!("Error: {}", e);
            return 1;
        }
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("I/O error: failed to start runtime: {}", e);
            return 3;
        }
    };
    match runtime.block_on(animate(player, mode)) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("I/O error: failed to draw frame: {}", e);
            3
        }
    }
}

/// Draws every frame the auto-advance timer publishes until the run ends.
/// Stops at the first failed write, e.g. when stdout is a closed pipe.
async fn animate(player: Player, mode: DisplayMode) -> io::Result<()> {
    let mut auto = AutoPlay::new(player);
    let mut frames = auto.subscribe();
    let interactive = io::stdout().is_terminal();

    if !auto.start().await {
        let frame = frames.borrow().clone();
        let mut stdout = io::stdout().lock();
        render::write_frame(&mut stdout, &frame, mode, interactive)?;
        writeln!(stdout, "Nothing to animate.")?;
        return Ok(());
    }

    loop {
        let frame = frames.borrow_and_update().clone();
        render::write_frame(&mut io::stdout().lock(), &frame, mode, interactive)?;
        if frame.finished || frames.changed().await.is_err() {
            break;
        }
    }
    auto.wait().await;
    Ok(())
}

/// Resolves the algorithm, dataset and target from the command line.
fn prepare(args: &InputArgs) -> Result<Run, String> {
    let algorithm: Algorithm = args.algorithm.parse().map_err(|e| format!("{}", e))?;

    let mut input = match &args.data {
        Some(text) => parse_numbers(text).map_err(|e| format!("{}", e))?,
        None => {
            let mut config = DatasetConfig::from_env();
            if let Some(len) = args.len {
                config.len = len;
            }
            if args.seed.is_some() {
                config.seed = args.seed;
            }
            random_dataset(&config).map_err(|e| format!("{}", e))?
        }
    };

    let target = match &args.target {
        Some(text) => Some(parse_target(text).map_err(|e| format!("invalid target: {}", e))?),
        None => None,
    };
    if algorithm.is_search() && target.is_none() {
        return Err(format!("{} needs --target", algorithm));
    }

    if algorithm.requires_sorted_input() {
        input.sort_by(f64::total_cmp);
        tracing::info!("sorted input ascending for {}", algorithm);
    }

    Ok(Run {
        algorithm,
        input,
        target,
    })
}

/// Reads a step list from a JSON file: either a bare array of steps or an
/// object with a `steps` field, as printed by the steps subcommand.
fn load_trace(path: &Path) -> Result<Vec<StepRecord>, (i32, String)> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| (3, format!("failed to read '{}': {}", path.display(), e)))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| (1, format!("'{}' is not valid JSON: {}", path.display(), e)))?;
    let steps = match value.get("steps") {
        Some(steps) => steps.clone(),
        None => value,
    };
    serde_json::from_value(steps)
        .map_err(|e| (1, format!("'{}' is not a step list: {}", path.display(), e)))
}
