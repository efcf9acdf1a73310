//! Checks against the reference live-birth pregnancy-length table.

use thinkstats::hist::{all_modes, mode, mode_with_freq};
use thinkstats::pmf::{pmf_mean, pmf_var, Pmf};
use thinkstats::reference::*;

#[test]
fn mode_is_39_weeks() {
    let hist = prglngth_hist();
    assert_eq!(mode(&hist), Some(EXPECTED_MODE));
    assert_eq!(mode_with_freq(&hist), Some((39, 4693)));
}

#[test]
fn ranked_modes() {
    let hist = prglngth_hist();
    let modes = all_modes(&hist);

    assert_eq!(modes[0], (EXPECTED_MODE, EXPECTED_MODE_FREQ));
    assert_eq!(&modes[1..5], &[(40, 1116), (38, 607), (41, 587), (37, 455)]);
    assert!(modes.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(modes.len(), hist.len());

    let total: u64 = modes.iter().map(|&(_, f)| f).sum();
    assert_eq!(total, LIVE_BIRTHS);
}

#[test]
fn ranked_modes_ties_in_value_order() {
    let modes = all_modes(&prglngth_hist());
    let singletons: Vec<i32> = modes
        .iter()
        .filter(|&&(_, f)| f == 1)
        .map(|&(v, _)| v)
        .collect();
    assert_eq!(singletons, vec![0, 4, 9, 13, 18, 19, 20, 23, 46, 47]);
}

#[test]
fn smallest_and_largest() {
    let hist = prglngth_hist();
    assert_eq!(hist.smallest(3), vec![(0, 1), (4, 1), (9, 1)]);
    assert_eq!(hist.largest(3), vec![(50, 2), (48, 7), (47, 1)]);
}

#[test]
fn pmf_mean_and_var() {
    let pmf = Pmf::from_hist(&prglngth_hist()).unwrap();
    let mean = pmf_mean(&pmf);
    let var = pmf_var(&pmf, Some(mean));

    assert!((mean - EXPECTED_MEAN).abs() < 1e-9, "mean={mean}");
    assert!((var - EXPECTED_VAR).abs() < 1e-9, "var={var}");
    assert!((mean - pmf.mean()).abs() < 1e-9);
    assert!((var - pmf.var(None)).abs() < 1e-9);
    assert!((var - pmf_var(&pmf, None)).abs() < 1e-12);
}

#[test]
fn pmf_summary() {
    let pmf = Pmf::from_hist(&prglngth_hist()).unwrap();
    assert_eq!(pmf.label(), PRGLNGTH_LABEL);
    assert!(pmf.is_normalized(1e-12));
    assert_eq!(pmf.mode(), Some(EXPECTED_MODE));
    assert_eq!(pmf.percentile(50.0), Some(39));
    assert!((pmf.prob(39) - 4693.0 / 9148.0).abs() < 1e-12);
}
