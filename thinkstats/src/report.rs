//! JSON summaries written by the harness binaries, and JSON table input.
//!
//! Input tables come in one of two shapes:
//! - an object of counts, `{"39": 4693, "40": 1116, ...}`
//! - an array of raw observations, `[39, 40, 39, ...]`

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::hist::{all_modes, mode_with_freq, Hist};
use crate::pmf::{pmf_mean, pmf_var, Pmf};
use crate::value::Value;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModeEntry<K> {
    pub value: K,
    pub freq: u64,
}

#[derive(Debug, Serialize)]
pub struct ModeReport<K> {
    pub label: String,
    pub mode: K,
    pub mode_freq: u64,
    /// Number of observations.
    pub total: u64,
    /// Most frequent values, most frequent first.
    pub top: Vec<ModeEntry<K>>,
}

impl<K: Value + Serialize> ModeReport<K> {
    /// `None` for an empty histogram.
    pub fn from_hist(hist: &Hist<K>, top_n: usize) -> Option<Self> {
        let (mode, mode_freq) = mode_with_freq(hist)?;
        let top = all_modes(hist)
            .into_iter()
            .take(top_n)
            .map(|(value, freq)| ModeEntry { value, freq })
            .collect();
        Some(ModeReport {
            label: hist.label().to_string(),
            mode,
            mode_freq,
            total: hist.total(),
            top,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PmfReport {
    pub label: String,
    pub num_values: usize,
    pub total_probability: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Same moments from the iterator-based implementation on [`Pmf`].
    pub reference_mean: f64,
    pub reference_variance: f64,
}

impl PmfReport {
    pub fn from_pmf<K: Value>(pmf: &Pmf<K>) -> Self {
        let mean = pmf_mean(pmf);
        let variance = pmf_var(pmf, Some(mean));
        PmfReport {
            label: pmf.label().to_string(),
            num_values: pmf.len(),
            total_probability: pmf.total(),
            mean,
            variance,
            std_dev: variance.sqrt(),
            reference_mean: pmf.mean(),
            reference_variance: pmf.var(None),
        }
    }
}

/// Write `report` as pretty JSON, creating the parent directory if needed.
pub fn save_report<T: Serialize>(report: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("Saved report to {}", path.display());
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableFile {
    Counts(BTreeMap<String, u64>),
    Values(Vec<i64>),
}

/// Parse a JSON table (counts object or array of observations) into a histogram.
pub fn parse_hist(json: &str) -> Result<Hist<i64>> {
    match serde_json::from_str::<TableFile>(json)? {
        TableFile::Counts(counts) => {
            let mut hist = Hist::new();
            for (key, n) in counts {
                let value = key
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| StatsError::InvalidKey(key.clone()))?;
                hist.try_incr(value, n)?;
            }
            hist.checked_total().ok_or(StatsError::TotalOverflow)?;
            Ok(hist)
        }
        TableFile::Values(values) => Ok(Hist::from_values(values)),
    }
}

/// Read a JSON table from disk. The histogram is labelled with the file stem.
pub fn read_hist(path: &Path) -> Result<Hist<i64>> {
    let json = fs::read_to_string(path)?;
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(parse_hist(&json)?.with_label(label))
}

/// Two groups of raw observations, e.g. birth weights of first babies and others.
/// Missing values are `null`.
#[derive(Debug, Deserialize)]
pub struct GroupsFile {
    pub firsts: Vec<Option<f64>>,
    pub others: Vec<Option<f64>>,
}

impl GroupsFile {
    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn firsts(&self) -> Vec<f64> {
        with_nan(&self.firsts)
    }

    pub fn others(&self) -> Vec<f64> {
        with_nan(&self.others)
    }
}

fn with_nan(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}
