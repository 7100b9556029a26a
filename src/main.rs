//! u-select: score a candidate list and pick one by annealing.
//!
//! Without `--input` the built-in Tsuen Wan demo grid is scored with the
//! stock resonance scorer.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, Level};
use u_select::anneal::{AnnealConfig, Annealer, SearchResult};
use u_select::scoring::{score_candidates, CandidateProfile, ResonanceScorer};

#[derive(Parser)]
#[command(name = "u-select")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of candidate profiles
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON annealing configuration; missing fields use defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Standard deviation of score noise (overrides the config file)
    #[arg(long)]
    noise: Option<f64>,

    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn demo_grid() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile::new("The Mills - Cozy Cafe", "The Mills", 4.7, 0.8)
            .with_tags(["cozy", "artistic"])
            .with_category("CALM"),
        CandidateProfile::new("Lo Tak Court - Street Food", "Snacks", 4.3, 0.98)
            .with_tags(["energetic"])
            .with_category("HAPPY"),
        CandidateProfile::new("Nina Mall - Premium Dining", "Nina Mall", 4.5, 0.7)
            .with_tags(["quiet", "zen"])
            .with_category("FOCUS"),
        CandidateProfile::new("Sam Tung Uk - Heritage Noodles", "Old School", 4.2, 0.95)
            .with_tags(["quiet"])
            .with_category("LUCKY"),
    ]
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let value = serde_json::from_str(&text)
        .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
    Ok(value)
}

fn report(result: &SearchResult) {
    println!("--- u-select ---");
    match result.candidate.as_deref() {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("Winner: (no candidates)"),
    }
    println!("Score: {:.4}", result.value);
    println!("Steps: {}", result.iterations);
    println!("Accepted moves: {}", result.accepted_moves);
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config: AnnealConfig = match &args.config {
        Some(path) => read_json(path)?,
        None => AnnealConfig::default(),
    };
    if let Some(noise) = args.noise {
        config = config.with_noise_scale(noise);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let profiles = match &args.input {
        Some(path) => read_json(path)?,
        None => demo_grid(),
    };
    info!(candidates = profiles.len(), "scoring candidates");

    let scores = score_candidates(&ResonanceScorer::default(), &profiles)?;
    let result = Annealer::run(&scores, &config)?;
    report(&result);
    Ok(())
}
