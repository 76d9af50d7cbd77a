//! # intro-stats
//!
//! Introductory statistics for small samples, following the hand calculations of a first
//! statistics course.
//!
//! The crate computes sums of squares, Pearson's correlation coefficient and Student's t-tests.
//! Critical values come from fixed t tables rather than from the distribution itself, so the
//! results match what a student reads off the back of the textbook.
//!
//! ## Core Features
//!
//! - **Descriptive helpers**: sum of squares, sum of products, pooled variance, standard errors
//! - **Critical value tables**: one- and two-tailed tables at the .05, .01 and .001 levels
//! - **t-tests**: single sample and independent samples, returning a structured verdict
//! - **Correlation**: Pearson's r together with a scatter plot on fixed `[0, 100]` axes
//!
//! ## Quick Start
//!
//! ```rust
//! use intro_stats::testing::{Significance, TTestConfig};
//! use intro_stats::testing::inference::SampleTTests;
//!
//! let config = TTestConfig::non_directional(Significance::P05);
//! let result = [300.0, 250.0, 200.0].t_test_single(250.0, &config).unwrap();
//! assert_eq!(result.statistic, 0.0);
//! assert!(!result.significant);
//! ```
//!
//! ## Module Organization
//!
//! - **[`descriptive`]**: sums of squares and derived quantities
//! - **[`testing`]**: critical values, t-tests and effect sizes
//! - **[`correlation`]**: Pearson's r and the scatter plot

pub mod correlation;
pub mod descriptive;
pub mod error;
pub mod testing;

pub use error::StatsError;
