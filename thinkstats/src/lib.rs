//! # thinkstats: frequency tables, PMFs and their summary statistics
//!
//! Read-only reductions over two table types built from a numeric column of a
//! records dataset:
//!
//! | Table | Rust type | Reductions |
//! |-------|-----------|------------|
//! | Frequency table (value → count) | [`hist::Hist`] | [`hist::mode`], [`hist::all_modes`] |
//! | Probability mass table (value → probability) | [`pmf::Pmf`] | [`pmf::pmf_mean`], [`pmf::pmf_var`] |
//!
//! Both tables are `BTreeMap`s keyed by a [`value::Value`], so they iterate in
//! ascending value order and can be iterated any number of times.
//!
//! ## Mode finder
//!
//! `mode` returns the most frequent value. Candidates are compared as
//! `(freq, value)` pairs, so a tie in frequency goes to the larger value.
//! `all_modes` returns every `(value, freq)` pair sorted by decreasing frequency with
//! a stable sort: equal frequencies stay in ascending value order.
//!
//! ## PMF statistics
//!
//! `pmf_mean` is Σ p·x and `pmf_var` is Σ p·(x − mean)², both accumulated from 0.0.
//! They do not check normalization, and an empty table gives 0.0 for both.
//!
//! ## Also here
//!
//! - [`sample`]: mean/variance over raw columns and Cohen's effect size
//! - [`reference`]: the live-birth pregnancy-length table the harnesses verify against
//! - [`report`]: JSON input tables and JSON summaries
//! - [`env_config`]: logging and environment configuration for the binaries

pub mod env_config;
pub mod error;
pub mod hist;
pub mod pmf;
pub mod reference;
pub mod report;
pub mod sample;
pub mod value;
pub mod verify;

pub use error::{Result, StatsError};
pub use hist::{all_modes, mode, mode_with_freq, Hist};
pub use pmf::{pmf_mean, pmf_var, Pmf};
pub use value::Value;
