//! Reference pregnancy-length table.
//!
//! Frequencies of `prglngth` (weeks) over the 9148 live births of the 2002 NSFG
//! pregnancy file, as prepared by the dataset-cleaning step upstream of this crate.
//! The harness binaries and integration tests check the mode finder and PMF
//! statistics against it.

use crate::hist::Hist;

/// `(weeks, live births)` pairs in ascending order of weeks.
pub const PRGLNGTH_LIVE_COUNTS: &[(i32, u64)] = &[
    (0, 1),
    (4, 1),
    (9, 1),
    (13, 1),
    (17, 2),
    (18, 1),
    (19, 1),
    (20, 1),
    (21, 2),
    (22, 7),
    (23, 1),
    (24, 13),
    (25, 3),
    (26, 35),
    (27, 3),
    (28, 32),
    (29, 21),
    (30, 138),
    (31, 27),
    (32, 115),
    (33, 49),
    (34, 60),
    (35, 311),
    (36, 321),
    (37, 455),
    (38, 607),
    (39, 4693),
    (40, 1116),
    (41, 587),
    (42, 328),
    (43, 148),
    (44, 46),
    (45, 10),
    (46, 1),
    (47, 1),
    (48, 7),
    (50, 2),
];

pub const LIVE_BIRTHS: u64 = 9148;
pub const EXPECTED_MODE: i32 = 39;
pub const EXPECTED_MODE_FREQ: u64 = 4693;
pub const EXPECTED_MEAN: f64 = 38.56055968517709;
pub const EXPECTED_VAR: f64 = 7.301863788195441;

pub const PRGLNGTH_LABEL: &str = "prglngth";

/// Pregnancy length histogram of live births.
pub fn prglngth_hist() -> Hist<i32> {
    Hist::from_counts(PRGLNGTH_LIVE_COUNTS.iter().copied()).with_label(PRGLNGTH_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sorted_and_unique() {
        assert!(PRGLNGTH_LIVE_COUNTS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_total_is_live_births() {
        assert_eq!(prglngth_hist().total(), LIVE_BIRTHS);
    }
}
