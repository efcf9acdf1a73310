//! Mode finder harness: most frequent pregnancy length and the ranked modes.
//!
//! With no `--input`, runs against the reference live-birth table and verifies the
//! known constants. `--weights` additionally compares two groups of birth weights.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use thinkstats::env_config;
use thinkstats::hist::{all_modes, mode, Hist};
use thinkstats::reference::{self, EXPECTED_MODE, EXPECTED_MODE_FREQ, LIVE_BIRTHS};
use thinkstats::report::{read_hist, save_report, GroupsFile, ModeReport};
use thinkstats::sample::{cohen_effect_size, mean, non_missing, var};
use thinkstats::verify::ensure_eq;
use thinkstats::{Result, StatsError, Value};

#[derive(Parser, Debug)]
#[command(name = "modes", about = "Mode and ranked modes of a frequency table")]
struct Args {
    /// JSON table: object of counts or array of observations (default: reference table)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of ranked modes to print
    #[arg(long, default_value_t = 5)]
    top: usize,
    /// JSON file with `firsts` and `others` birth weights
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Write a JSON summary to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.weights {
        compare_weights(&GroupsFile::read(path)?)?;
    }

    match &args.input {
        Some(path) => {
            info!("Reading table from {}", path.display());
            let hist = read_hist(path)?;
            report_modes(&hist, args)?;
        }
        None => {
            let hist = reference::prglngth_hist();
            report_modes(&hist, args)?;
            verify_reference(&hist)?;
        }
    }
    Ok(())
}

fn report_modes<K: Value + serde::Serialize>(hist: &Hist<K>, args: &Args) -> Result<()> {
    debug!("{} distinct values, {} observations", hist.len(), hist.total());

    let mode = mode(hist).ok_or(StatsError::ZeroTotal)?;
    println!("Mode of {} {}", hist.label(), mode);

    for (value, freq) in all_modes(hist).into_iter().take(args.top) {
        println!("{} {}", value, freq);
    }

    if let Some(path) = &args.output {
        if let Some(report) = ModeReport::from_hist(hist, args.top) {
            save_report(&report, &env_config::output_path(path))?;
        }
    }
    Ok(())
}

fn verify_reference(hist: &Hist<i32>) -> Result<()> {
    let found = mode(hist).ok_or(StatsError::ZeroTotal)?;
    ensure_eq("mode", EXPECTED_MODE, found)?;

    let modes = all_modes(hist);
    ensure_eq("first ranked frequency", EXPECTED_MODE_FREQ, modes[0].1)?;

    let ranked_total: u64 = modes.iter().map(|&(_, freq)| freq).sum();
    ensure_eq("ranked frequency total", LIVE_BIRTHS, ranked_total)?;
    Ok(())
}

fn compare_weights(groups: &GroupsFile) -> Result<()> {
    let firsts = non_missing(&groups.firsts());
    let others = non_missing(&groups.others());
    let too_small = |len: usize| StatsError::EmptySample { len };

    let mean1 = mean(&firsts).ok_or_else(|| too_small(firsts.len()))?;
    let mean2 = mean(&others).ok_or_else(|| too_small(others.len()))?;
    let var1 = var(&firsts, 1).ok_or_else(|| too_small(firsts.len()))?;
    let var2 = var(&others, 1).ok_or_else(|| too_small(others.len()))?;

    println!("Mean weight");
    println!("First babies {}", mean1);
    println!("Other babies {}", mean2);
    println!("Variance in weight");
    println!("First babies {}", var1);
    println!("Other babies {}", var2);
    println!("Difference in lbs {}", mean1 - mean2);
    println!("Cohen d {}", cohen_effect_size(&firsts, &others)?);
    Ok(())
}

fn main() -> ExitCode {
    env_config::init_logging();
    let args = Args::parse();
    let script = std::env::args().next().unwrap_or_else(|| "modes".to_string());

    match run(&args) {
        Ok(()) => {
            println!("{}: All tests passed.", script);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
