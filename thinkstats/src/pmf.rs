//! Probability mass functions and their moments.
//!
//! [`pmf_mean`] and [`pmf_var`] are the direct weighted sums:
//!
//! - mean = Σ p(x)·x
//! - var  = Σ p(x)·(x − mean)²   (population variance, no Bessel correction)
//!
//! Neither checks that the probabilities sum to 1; they trust the table. An empty table
//! yields 0.0 for both. [`Pmf::mean`] and [`Pmf::var`] compute the same quantities through
//! iterator reductions and serve as the reference to compare against.

use std::collections::BTreeMap;

use crate::error::{Result, StatsError};
use crate::hist::Hist;
use crate::value::Value;

/// Probability mass table: value → probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf<K: Value> {
    probs: BTreeMap<K, f64>,
    label: String,
}

impl<K: Value> Default for Pmf<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Value> Pmf<K> {
    pub fn new() -> Self {
        Pmf {
            probs: BTreeMap::new(),
            label: String::new(),
        }
    }

    /// Normalize a frequency table. Fails on an empty (or all-zero) table.
    pub fn from_hist(hist: &Hist<K>) -> Result<Self> {
        let total = hist.total();
        if total == 0 {
            return Err(StatsError::ZeroTotal);
        }
        let factor = 1.0 / total as f64;
        let probs = hist
            .items()
            .map(|(value, freq)| (value, freq as f64 * factor))
            .collect();
        Ok(Pmf {
            probs,
            label: hist.label().to_string(),
        })
    }

    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Result<Self> {
        Pmf::from_hist(&Hist::from_values(values))
    }

    /// Take `(value, probability)` pairs as given, without normalizing.
    ///
    /// Repeated values accumulate. Negative and non-finite probabilities are rejected.
    pub fn from_probs<I: IntoIterator<Item = (K, f64)>>(probs: I) -> Result<Self> {
        let mut pmf = Pmf::new();
        for (value, prob) in probs {
            if !prob.is_finite() || prob < 0.0 {
                return Err(StatsError::InvalidProbability {
                    value: value.to_string(),
                    prob,
                });
            }
            pmf.incr(value, prob);
        }
        Ok(pmf)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set(&mut self, value: K, prob: f64) {
        self.probs.insert(value, prob);
    }

    pub fn incr(&mut self, value: K, delta: f64) {
        *self.probs.entry(value).or_insert(0.0) += delta;
    }

    /// Probability of `value`, 0.0 if absent.
    pub fn prob(&self, value: K) -> f64 {
        self.probs.get(&value).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Rescale so the probabilities sum to `fraction`. Returns the total before rescaling.
    pub fn normalize(&mut self, fraction: f64) -> Result<f64> {
        let total = self.total();
        if total == 0.0 {
            return Err(StatsError::ZeroTotal);
        }
        let factor = fraction / total;
        for prob in self.probs.values_mut() {
            *prob *= factor;
        }
        Ok(total)
    }

    pub fn is_normalized(&self, tol: f64) -> bool {
        (self.total() - 1.0).abs() <= tol
    }

    pub fn values(&self) -> impl Iterator<Item = K> + '_ {
        self.probs.keys().copied()
    }

    /// `(value, prob)` pairs in ascending value order.
    pub fn items(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.probs.iter().map(|(&v, &p)| (v, p))
    }

    pub fn mean(&self) -> f64 {
        self.probs.iter().map(|(&x, &p)| x.to_f64() * p).sum()
    }

    /// Variance around `mu`, or around [`Pmf::mean`] when `None`.
    pub fn var(&self, mu: Option<f64>) -> f64 {
        let mu = mu.unwrap_or_else(|| self.mean());
        self.probs
            .iter()
            .map(|(&x, &p)| (x.to_f64() - mu).powi(2) * p)
            .sum()
    }

    pub fn std(&self, mu: Option<f64>) -> f64 {
        self.var(mu).sqrt()
    }

    /// Most probable value; ties go to the larger value.
    pub fn mode(&self) -> Option<K> {
        self.probs
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1).then(a.0.cmp(b.0)))
            .map(|(&v, _)| v)
    }

    /// `(value, cumulative probability)` pairs in ascending value order.
    pub fn cdf_items(&self) -> Vec<(K, f64)> {
        let mut cum_prob = 0.0;
        self.items()
            .map(|(value, prob)| {
                cum_prob += prob;
                (value, cum_prob)
            })
            .collect()
    }

    /// Smallest value whose cumulative probability reaches `p` percent.
    ///
    /// If rounding keeps the running total just short of the target, the largest value
    /// is returned. `None` only for an empty table.
    pub fn percentile(&self, p: f64) -> Option<K> {
        let target = p / 100.0;
        let cdf = self.cdf_items();
        cdf.iter()
            .find(|&&(_, cum_prob)| cum_prob >= target)
            .or(cdf.last())
            .map(|&(value, _)| value)
    }
}

/// Mean of a PMF by direct weighted summation.
pub fn pmf_mean<K: Value>(pmf: &Pmf<K>) -> f64 {
    let mut mean = 0.0;
    for (x, p) in pmf.items() {
        mean += p * x.to_f64();
    }
    mean
}

/// Variance of a PMF. Computes the mean with [`pmf_mean`] when none is supplied.
pub fn pmf_var<K: Value>(pmf: &Pmf<K>, mean: Option<f64>) -> f64 {
    let mean = mean.unwrap_or_else(|| pmf_mean(pmf));
    let mut variance = 0.0;
    for (x, p) in pmf.items() {
        variance += p * (x.to_f64() - mean).powi(2);
    }
    variance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice() -> Pmf<u8> {
        Pmf::from_values(1..=6u8).unwrap()
    }

    #[test]
    fn test_from_hist() {
        let hist = Hist::from_values([1, 2, 2, 3, 5]).with_label("small");
        let pmf = Pmf::from_hist(&hist).unwrap();
        assert_eq!(pmf.label(), "small");
        assert!((pmf.prob(2) - 0.4).abs() < 1e-12);
        assert_eq!(pmf.prob(4), 0.0);
        assert!(pmf.is_normalized(1e-12));
    }

    #[test]
    fn test_from_empty_hist() {
        let hist: Hist<i32> = Hist::new();
        assert!(matches!(Pmf::from_hist(&hist), Err(StatsError::ZeroTotal)));
    }

    #[test]
    fn test_from_probs_rejects_invalid() {
        assert!(matches!(
            Pmf::from_probs([(1, 0.5), (2, -0.1)]),
            Err(StatsError::InvalidProbability { .. })
        ));
        assert!(Pmf::from_probs([(1, f64::NAN)]).is_err());
        let pmf = Pmf::from_probs([(1, 0.25), (1, 0.25), (3, 0.5)]).unwrap();
        assert_eq!(pmf.prob(1), 0.5);
    }

    #[test]
    fn test_normalize() {
        let mut pmf = Pmf::from_probs([(1, 2.0), (2, 6.0)]).unwrap();
        let old_total = pmf.normalize(1.0).unwrap();
        assert_eq!(old_total, 8.0);
        assert!((pmf.prob(1) - 0.25).abs() < 1e-12);
        assert!((pmf.prob(2) - 0.75).abs() < 1e-12);

        let mut empty: Pmf<i32> = Pmf::new();
        assert!(empty.normalize(1.0).is_err());
    }

    #[test]
    fn test_dice_moments() {
        let pmf = dice();
        assert!((pmf_mean(&pmf) - 3.5).abs() < 1e-12);
        assert!((pmf_var(&pmf, None) - 35.0 / 12.0).abs() < 1e-12);
        assert!((pmf.mean() - 3.5).abs() < 1e-12);
        assert!((pmf.std(None) - (35.0f64 / 12.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_var_with_precomputed_mean() {
        let pmf = Pmf::from_values([1i64, 1, 2, 7, 9, 9, 9]).unwrap();
        let mean = pmf_mean(&pmf);
        assert!((pmf_var(&pmf, Some(mean)) - pmf_var(&pmf, None)).abs() < 1e-12);
    }

    #[test]
    fn test_no_normalization_check() {
        // weights summing to 2 double the mean
        let pmf = Pmf::from_probs([(3, 1.0), (5, 1.0)]).unwrap();
        assert_eq!(pmf_mean(&pmf), 8.0);
    }

    #[test]
    fn test_empty_moments() {
        let pmf: Pmf<i32> = Pmf::new();
        assert_eq!(pmf_mean(&pmf), 0.0);
        assert_eq!(pmf_var(&pmf, None), 0.0);
        assert_eq!(pmf.percentile(50.0), None);
        assert_eq!(pmf.mode(), None);
    }

    #[test]
    fn test_mode_and_percentile() {
        let pmf = Pmf::from_values([1, 2, 2, 3, 3, 5]).unwrap();
        assert_eq!(pmf.mode(), Some(3));
        assert_eq!(pmf.percentile(0.0), Some(1));
        assert_eq!(pmf.percentile(40.0), Some(2));
        assert_eq!(pmf.percentile(51.0), Some(3));
        assert_eq!(pmf.percentile(100.0), Some(5));
    }

    #[test]
    fn test_cdf_items() {
        let pmf = Pmf::from_probs([(1, 0.25), (2, 0.25), (4, 0.5)]).unwrap();
        assert_eq!(pmf.cdf_items(), vec![(1, 0.25), (2, 0.5), (4, 1.0)]);
    }
}
