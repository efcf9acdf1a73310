//! Column statistics over raw observations, and Cohen's effect size.
//!
//! Missing observations are encoded as `NaN` and skipped by every function here.

use crate::error::{Result, StatsError};

/// Copy of `values` with `NaN` entries dropped.
pub fn non_missing(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// Arithmetic mean. `None` when there is no observation.
pub fn mean(values: &[f64]) -> Option<f64> {
    let values = non_missing(values);
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Variance with `ddof` delta degrees of freedom (`ddof = 1` is the sample variance).
///
/// `None` when there are no more observations than `ddof`.
pub fn var(values: &[f64], ddof: u32) -> Option<f64> {
    let values = non_missing(values);
    let n = values.len();
    if n <= ddof as usize {
        return None;
    }
    let mu = values.iter().sum::<f64>() / n as f64;
    let ss: f64 = values.iter().map(|&x| (x - mu).powi(2)).sum();
    Some(ss / (n - ddof as usize) as f64)
}

pub fn std(values: &[f64], ddof: u32) -> Option<f64> {
    var(values, ddof).map(f64::sqrt)
}

/// Difference in means over the pooled standard deviation.
///
/// Each group's variance is the sample variance; the pooled variance weights them by
/// group size: `(n1·var1 + n2·var2) / (n1 + n2)`.
pub fn cohen_effect_size(group1: &[f64], group2: &[f64]) -> Result<f64> {
    let group1 = non_missing(group1);
    let group2 = non_missing(group2);
    let (n1, n2) = (group1.len(), group2.len());
    for n in [n1, n2] {
        if n < 2 {
            return Err(StatsError::EmptySample { len: n });
        }
    }

    let (mean1, var1) = mean_and_sample_var(&group1);
    let (mean2, var2) = mean_and_sample_var(&group2);

    let pooled_var = (n1 as f64 * var1 + n2 as f64 * var2) / (n1 + n2) as f64;
    if pooled_var == 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    Ok((mean1 - mean2) / pooled_var.sqrt())
}

/// Mean and ddof-1 variance of at least two non-missing values.
fn mean_and_sample_var(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mu = values.iter().sum::<f64>() / n;
    let ss: f64 = values.iter().map(|&x| (x - mu).powi(2)).sum();
    (mu, ss / (n - 1.0))
}
