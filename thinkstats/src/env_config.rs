//! Shared environment configuration for the harness binaries.
//!
//! Consolidates `THINKSTATS_LOG`, `THINKSTATS_OUTPUT_DIR` and `THINKSTATS_TOLERANCE`
//! reads shared by both binaries.

use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Install the `env_logger` backend with the `THINKSTATS_LOG` filter (default `info`).
/// Tolerates an already-installed logger.
pub fn init_logging() {
    let filter =
        std::env::var("THINKSTATS_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp(None)
        .try_init()
        .ok(); // May fail if already initialized
}

/// Read `THINKSTATS_TOLERANCE` (default 1e-9).
pub fn tolerance() -> f64 {
    parse_tolerance(std::env::var("THINKSTATS_TOLERANCE").ok().as_deref())
}

fn parse_tolerance(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite() && *t >= 0.0)
        .unwrap_or(DEFAULT_TOLERANCE)
}

/// Place a relative report path under `THINKSTATS_OUTPUT_DIR` when it is set.
pub fn output_path(path: &Path) -> PathBuf {
    let dir = std::env::var_os("THINKSTATS_OUTPUT_DIR").map(PathBuf::from);
    resolve_output(path, dir.as_deref())
}

fn resolve_output(path: &Path, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
