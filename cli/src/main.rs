//! nashpath CLI - command-line harness for the nashpath engine
//!
//! Reads, generates and solves normal form games:
//!
//! ```text
//! nashpath solve game.nfg [--config yamamoto.toml] [--deadline 30]
//! nashpath random --dims 3 3 --seed 7 --out game.nfg
//! nashpath sweep --dims 2 3 --count 200
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use nashpath_builder::{random_game, read_nfg};
use nashpath_engine::{
    Cancelled, NfgWriter, NullStatus, StatusSink, Termination, YamamotoConfig, YamamotoSolver,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log partition changes and progress
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Solve a .nfg game with the Yamamoto continuation")]
    Solve {
        #[arg(required = true)]
        file: PathBuf,
        /// TOML file with solver settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Cancel after this many seconds
        #[arg(long)]
        deadline: Option<f64>,
    },
    #[command(about = "Write a seeded random game in .nfg format")]
    Random {
        #[arg(long, num_args = 1.., required = true)]
        dims: Vec<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 4)]
        decimals: u32,
        /// Output file; stdout when absent
        #[arg(long)]
        out: Option<PathBuf>,
    },
    #[command(about = "Solve many random games in parallel")]
    Sweep {
        #[arg(long, num_args = 1.., required = true)]
        dims: Vec<usize>,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Logs progress and cancels once the deadline has passed.
struct LogStatus {
    deadline: Option<Instant>,
}

impl StatusSink for LogStatus {
    fn poll(&mut self) -> Result<(), Cancelled> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Cancelled),
            _ => Ok(()),
        }
    }

    fn set_progress(&mut self, fraction: f64, message: &str) {
        log::debug!("{:>6.2}% {}", fraction * 100.0, message);
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn load_config(path: Option<&Path>) -> anyhow::Result<YamamotoConfig> {
    let Some(path) = path else {
        return Ok(YamamotoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn solve(file: &Path, config: Option<&Path>, deadline: Option<f64>) -> anyhow::Result<()> {
    let input = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let game = read_nfg(BufReader::new(input)).with_context(|| format!("reading {}", file.display()))?;
    let solver = YamamotoSolver::new(load_config(config)?);
    let mut status = LogStatus {
        deadline: deadline.map(|secs| Instant::now() + Duration::from_secs_f64(secs)),
    };

    let start = Instant::now();
    let report = solver
        .solve(&game, &mut status)
        .with_context(|| format!("solving {}", file.display()))?;

    println!("Game: {}", game.title());
    println!("Termination: {:?}", report.termination);
    println!("Steps: {}", report.steps);
    println!("Lambda: {:.6}", report.lambda);
    println!("Merges / splits: {} / {}", report.merges, report.splits);
    println!("Time: {:.2?}", start.elapsed());
    for profile in &report.equilibria {
        println!();
        for (pl, player) in game.players().iter().enumerate() {
            let probs: Vec<String> = profile
                .player(pl)
                .iter()
                .zip(player.strategies())
                .map(|(p, st)| format!("{}={:.6}", st.name(), p))
                .collect();
            println!("  {}: {}", player.name(), probs.join(" "));
        }
        println!("Max regret: {:.6}", profile.max_regret());
    }
    Ok(())
}

fn random(dims: &[usize], seed: u64, decimals: u32, out: Option<&Path>) -> anyhow::Result<()> {
    anyhow::ensure!(
        decimals <= nashpath_builder::random::MAX_DECIMALS,
        "at most {} decimals",
        nashpath_builder::random::MAX_DECIMALS
    );
    let game = random_game(dims, seed, decimals);
    match out {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            NfgWriter::new(BufWriter::new(file))
                .write_game(&game, decimals as usize)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => NfgWriter::new(std::io::stdout().lock())
            .write_game(&game, decimals as usize)
            .context("writing to stdout")?,
    }
    Ok(())
}

fn sweep(dims: &[usize], count: usize, seed: u64, config: Option<&Path>) -> anyhow::Result<()> {
    let solver = YamamotoSolver::new(load_config(config)?);
    let start = Instant::now();
    let results: Vec<(u64, Result<(Termination, f64), String>)> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let game = random_game(dims, seed + i, 4);
            let outcome = match solver.solve(&game, &mut NullStatus) {
                Ok(report) => Ok((
                    report.termination,
                    report.equilibria.first().map_or(f64::NAN, |p| p.max_regret()),
                )),
                Err(e) => Err(e.to_string()),
            };
            (seed + i, outcome)
        })
        .collect();

    let mut converged = 0;
    let mut exhausted = 0;
    let mut worst = 0.0f64;
    for (game_seed, result) in &results {
        match result {
            Ok((Termination::Converged, regret)) => {
                converged += 1;
                worst = worst.max(*regret);
            }
            Ok((termination, _)) => {
                exhausted += 1;
                log::debug!("seed {}: {:?}", game_seed, termination);
            }
            Err(e) => log::warn!("seed {}: {}", game_seed, e),
        }
    }
    let failed = results.len() - converged - exhausted;
    log::info!(
        "{:<32}{:<32}",
        format!("sweep {:?} x {}", dims, count),
        format!("{:.2?}", start.elapsed())
    );
    log::info!(
        "converged {}, step budget {}, failed {}, worst regret {:.6}",
        converged,
        exhausted,
        failed,
        worst
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    match cli.command {
        Command::Solve {
            file,
            config,
            deadline,
        } => solve(&file, config.as_deref(), deadline),
        Command::Random {
            dims,
            seed,
            decimals,
            out,
        } => random(&dims, seed, decimals, out.as_deref()),
        Command::Sweep {
            dims,
            count,
            seed,
            config,
        } => sweep(&dims, count, seed, config.as_deref()),
    }
}
