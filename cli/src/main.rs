//! bones CLI - Command-line interface for the Game of Bones solver
//!
//! With no subcommand, reports whether max forces a win from heaps 6 and 8.

use anyhow::{Context, Result};
use bones_engine::{evaluate, SelectionRule, SolverConfig};
use bones_tree::{build_tree, solve_many, tree_size, validate_heap};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::process::ExitCode;

/// Heaps solved when no subcommand is given.
const DEFAULT_HEAPS: [i64; 2] = [6, 8];

#[derive(Parser)]
#[command(name = "bones")]
#[command(version, about = "Exhaustive solver for the Game of Bones", long_about = None)]
struct Cli {
    /// Log construction and evaluation details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one starting heap; exits 0 if max wins, 1 otherwise
    Solve {
        #[arg(allow_negative_numbers = true)]
        heap: i64,

        #[arg(long, value_enum, default_value_t = Rule::AlwaysMax)]
        rule: Rule,

        /// Also print the line of best moves
        #[arg(long)]
        line: bool,
    },

    /// Solve every heap in FROM..=TO in parallel
    Table {
        #[arg(allow_negative_numbers = true)]
        from: i64,

        #[arg(allow_negative_numbers = true)]
        to: i64,

        #[arg(long, value_enum, default_value_t = Rule::AlwaysMax)]
        rule: Rule,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    /// Every position takes its highest-scoring child
    AlwaysMax,
    /// Min positions take their lowest-scoring child
    Alternating,
}

impl From<Rule> for SolverConfig {
    fn from(rule: Rule) -> Self {
        SolverConfig::with_rule(match rule {
            Rule::AlwaysMax => SelectionRule::AlwaysMax,
            Rule::Alternating => SelectionRule::Alternating,
        })
    }
}

fn init_logger(cli: &Cli) -> Result<()> {
    let level = match (cli.verbose, cli.quiet) {
        (true, _) => LevelFilter::Debug,
        (_, true) => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn solve_one(heap: i64, config: &SolverConfig, line: bool) -> Result<bool> {
    let tree = build_tree(heap).with_context(|| format!("build tree for heap {}", heap))?;
    let outcomes = evaluate(&tree, config).with_context(|| format!("evaluate heap {}", heap))?;
    println!("{}", outcomes.max_wins());
    if line {
        let moves: Vec<String> = outcomes
            .best_line(&tree)
            .iter()
            .map(|h| h.to_string())
            .collect();
        println!("{}", moves.join(" -> "));
    }
    Ok(outcomes.max_wins())
}

fn table(from: i64, to: i64, config: &SolverConfig) -> Result<()> {
    let heaps: Vec<i64> = (from..=to).collect();
    for (&heap, result) in heaps.iter().zip(solve_many(&heaps, config)) {
        let wins = result.with_context(|| format!("solve heap {}", heap))?;
        let size = tree_size(validate_heap(heap)?);
        println!("{:>4}  {:<5}  {} positions", heap, wins, size);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        None => {
            let config = SolverConfig::default();
            for (heap, result) in DEFAULT_HEAPS.iter().zip(solve_many(&DEFAULT_HEAPS, &config)) {
                let wins = result.with_context(|| format!("solve heap {}", heap))?;
                println!("heap {}: {}", heap, wins);
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Solve { heap, rule, line }) => {
            let wins = solve_one(heap, &rule.into(), line)?;
            Ok(if wins { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        Some(Commands::Table { from, to, rule }) => {
            table(from, to, &rule.into())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(&cli)?;
    log::debug!("bones solver v{}", env!("CARGO_PKG_VERSION"));
    run(cli)
}
