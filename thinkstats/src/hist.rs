//! Frequency tables and the mode finder.
//!
//! A [`Hist`] maps each observed value to the number of times it occurs. Keys are kept
//! in a `BTreeMap`, so iteration is always in ascending value order; the tie-break
//! behaviour of [`all_modes`] is defined relative to that order.
//!
//! The mode finder is two read-only reductions over a histogram:
//! - [`mode`]: the value with the highest frequency. Ties in frequency go to the larger
//!   value, because candidates are compared as `(freq, value)` pairs.
//! - [`all_modes`]: every `(value, freq)` pair, most frequent first. The sort is stable,
//!   so equal frequencies stay in ascending value order.

use std::collections::BTreeMap;

use crate::error::{Result, StatsError};
use crate::value::Value;

/// Frequency table: value → count of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hist<K: Value> {
    counts: BTreeMap<K, u64>,
    label: String,
}

impl<K: Value> Default for Hist<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Value> Hist<K> {
    pub fn new() -> Self {
        Hist {
            counts: BTreeMap::new(),
            label: String::new(),
        }
    }

    /// Count every element of a column of observations.
    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut hist = Hist::new();
        for value in values {
            hist.incr(value, 1);
        }
        hist
    }

    /// Build from `(value, count)` pairs. Repeated values accumulate.
    pub fn from_counts<I: IntoIterator<Item = (K, u64)>>(counts: I) -> Self {
        let mut hist = Hist::new();
        for (value, n) in counts {
            hist.incr(value, n);
        }
        hist
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add `n` occurrences of `value`. Saturates at `u64::MAX`.
    pub fn incr(&mut self, value: K, n: u64) {
        let count = self.counts.entry(value).or_insert(0);
        *count = count.saturating_add(n);
    }

    /// Like [`Hist::incr`], but fails instead of saturating.
    pub fn try_incr(&mut self, value: K, n: u64) -> Result<()> {
        let count = self.counts.entry(value).or_insert(0);
        *count = count
            .checked_add(n)
            .ok_or_else(|| StatsError::CountOverflow {
                value: value.to_string(),
            })?;
        Ok(())
    }

    /// Count for `value`, 0 if it never occurred.
    pub fn freq(&self, value: K) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn freqs(&self, values: &[K]) -> Vec<u64> {
        values.iter().map(|&v| self.freq(v)).collect()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of observations. Saturates at `u64::MAX`;
    /// see [`Hist::checked_total`].
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &n| acc.saturating_add(n))
    }

    /// Sum of all counts, `None` if it does not fit in a `u64`.
    pub fn checked_total(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |acc, &n| acc.checked_add(n))
    }

    pub fn values(&self) -> impl Iterator<Item = K> + '_ {
        self.counts.keys().copied()
    }

    /// `(value, freq)` pairs in ascending value order.
    pub fn items(&self) -> impl Iterator<Item = (K, u64)> + '_ {
        self.counts.iter().map(|(&v, &f)| (v, f))
    }

    /// The `n` lowest values with their frequencies, lowest first.
    pub fn smallest(&self, n: usize) -> Vec<(K, u64)> {
        self.items().take(n).collect()
    }

    /// The `n` highest values with their frequencies, highest first.
    pub fn largest(&self, n: usize) -> Vec<(K, u64)> {
        self.counts
            .iter()
            .rev()
            .take(n)
            .map(|(&v, &f)| (v, f))
            .collect()
    }

    pub fn mode(&self) -> Option<K> {
        mode(self)
    }

    pub fn mode_with_freq(&self) -> Option<(K, u64)> {
        mode_with_freq(self)
    }

    pub fn all_modes(&self) -> Vec<(K, u64)> {
        all_modes(self)
    }
}

impl<K: Value> FromIterator<K> for Hist<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Hist::from_values(iter)
    }
}

impl<K: Value> Extend<K> for Hist<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.incr(value, 1);
        }
    }
}

/// Value with the highest frequency. `None` for an empty table.
pub fn mode<K: Value>(hist: &Hist<K>) -> Option<K> {
    mode_with_freq(hist).map(|(value, _)| value)
}

/// Like [`mode`], also returning the winning frequency.
pub fn mode_with_freq<K: Value>(hist: &Hist<K>) -> Option<(K, u64)> {
    hist.items().max_by_key(|&(value, freq)| (freq, value))
}

/// All `(value, freq)` pairs in decreasing order of frequency.
pub fn all_modes<K: Value>(hist: &Hist<K>) -> Vec<(K, u64)> {
    let mut modes: Vec<(K, u64)> = hist.items().collect();
    // stable: equal frequencies keep ascending value order
    modes.sort_by(|a, b| b.1.cmp(&a.1));
    modes
}
