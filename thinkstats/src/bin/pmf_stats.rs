//! PMF statistics harness: mean and variance of the pregnancy-length PMF.
//!
//! Checks the direct weighted sums against the iterator-based moments on `Pmf`, and
//! against the known reference values when no `--input` is given.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use thinkstats::env_config;
use thinkstats::pmf::{pmf_mean, pmf_var, Pmf};
use thinkstats::reference::{self, EXPECTED_MEAN, EXPECTED_VAR};
use thinkstats::report::{read_hist, save_report, PmfReport};
use thinkstats::verify::ensure_close;
use thinkstats::{Result, Value};

#[derive(Parser, Debug)]
#[command(name = "pmf_stats", about = "Mean and variance of a probability mass function")]
struct Args {
    /// JSON table: object of counts or array of observations (default: reference table)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Write a JSON summary to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> Result<()> {
    let tol = env_config::tolerance();

    match &args.input {
        Some(path) => {
            info!("Reading table from {}", path.display());
            let pmf = Pmf::from_hist(&read_hist(path)?)?;
            check_moments(&pmf, tol, args)?;
        }
        None => {
            let pmf = Pmf::from_hist(&reference::prglngth_hist())?;
            let (mean, var) = check_moments(&pmf, tol, args)?;
            ensure_close("reference mean", EXPECTED_MEAN, mean, tol)?;
            ensure_close("reference variance", EXPECTED_VAR, var, tol)?;
        }
    }
    Ok(())
}

fn check_moments<K: Value>(pmf: &Pmf<K>, tol: f64, args: &Args) -> Result<(f64, f64)> {
    if !pmf.is_normalized(tol) {
        warn!("{} probabilities sum to {}", pmf.label(), pmf.total());
    }

    let mean = pmf_mean(pmf);
    let var = pmf_var(pmf, Some(mean));

    ensure_close("mean", pmf.mean(), mean, tol)?;
    ensure_close("variance", pmf.var(None), var, tol)?;
    ensure_close("variance without precomputed mean", var, pmf_var(pmf, None), tol)?;

    println!("mean/var {} {} {}", pmf.label(), mean, var);

    if let Some(path) = &args.output {
        save_report(&PmfReport::from_pmf(pmf), &env_config::output_path(path))?;
    }
    Ok((mean, var))
}

fn main() -> ExitCode {
    env_config::init_logging();
    let args = Args::parse();
    let script = std::env::args().next().unwrap_or_else(|| "pmf_stats".to_string());

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
