//! Statistical primitives for the goalrank analysis.
//!
//! This crate provides the numerical building blocks used to compare the
//! two goal-count samples:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation
//! - **Histogram generation**: unit-width frequency bins for goal totals
//! - **Normal distribution**: standard normal CDF and survival function
//! - **Ranking**: midrank assignment with tie bookkeeping
//! - **Mann-Whitney U**: two independent implementations of the one-sided
//!   rank-sum test, used to cross-validate each other
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing a sample
//! - [`histogram`]: Frequency distribution of integer goal totals
//! - [`normal`]: Standard normal CDF / survival function approximations
//! - [`ranks`]: Midranks and tie-correction terms over combined samples
//! - [`mwu`]: Structured Mann-Whitney U test result with effect sizes
//! - [`ranksum`]: Raw `(statistic, p-value)` Mann-Whitney U computation
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use goalrank_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Running the rank-sum test both ways
//!
//! ```
//! use goalrank_stats::{
//!     mwu::MannWhitneyTest,
//!     ranksum::{self, Alternative},
//! };
//!
//! let women = [4.0, 5.0, 6.0, 5.0, 4.0, 6.0];
//! let men = [1.0, 2.0, 1.0, 3.0, 2.0, 2.0];
//!
//! let test = MannWhitneyTest::greater(&women, &men).unwrap();
//! let (u, p) = ranksum::mann_whitney_u(&women, &men, Alternative::Greater).unwrap();
//!
//! assert_eq!(test.u_statistic, u);
//! assert!((test.p_value - p).abs() < 1e-6);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod mwu;
pub mod normal;
pub mod ranks;
pub mod ranksum;
