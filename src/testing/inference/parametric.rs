//! Student's t-tests for small samples.
//!
//! Both tests compute a t ratio, look its critical value up in the fixed tables and report the
//! outcome as a [`TTestResult`]. Nothing is printed; the verdict is emitted as a `tracing`
//! event and is available through the result's `Display` implementation.

use crate::descriptive::{mean, pooled_variance, sample_std_dev};
use crate::error::{Result, StatsError};
use crate::testing::critical::find_critical_value;
use crate::testing::effect::{cohens_d, cohens_d_single};
use crate::testing::{Sensitivity, TTestConfig, TTestResult};
use single_utilities::traits::FloatOps;
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, trace};

/// Perform a single-sample t-test.
///
/// # Arguments
///
/// * `data` - Sample observations, at least two
/// * `hypothesized_mean` - Population mean under the null hypothesis
/// * `config` - Directionality, significance level and tail
///
/// # Returns
///
/// `TTestResult` with `t = (x̄ − μ₀) / (s/√n)` and `n − 1` degrees of freedom.
pub fn t_test_single<T>(
    data: &[T],
    hypothesized_mean: f64,
    config: &TTestConfig,
) -> Result<TTestResult>
where
    T: FloatOps,
{
    if data.len() < 2 {
        return Err(StatsError::input(
            "single sample t-test needs at least two observations",
        ));
    }

    let df = data.len() - 1;
    let critical_value = find_critical_value(config.directional, config.significance, df)?;

    let avg = mean(data)?;
    let s = sample_std_dev(data)?;
    let standard_error = s / (data.len() as f64).sqrt();
    if standard_error == 0.0 {
        return Err(StatsError::input(
            "standard error is zero, the sample has no variance",
        ));
    }

    let t = (avg - hypothesized_mean) / standard_error;
    trace!(n = data.len(), mean = avg, std_dev = s, standard_error, "single sample t-test");

    let result = TTestResult::new(t, critical_value, df, *config)
        .with_standard_error(standard_error)
        .with_p_value(t_test_p_value(t, df, config));
    let result = match cohens_d_single(data, hypothesized_mean) {
        Ok(d) => result.with_effect_size(d),
        Err(_) => result,
    };

    log_verdict(&result);
    Ok(result)
}

/// Perform an independent-samples t-test with pooled variance.
///
/// # Arguments
///
/// * `group1` - First sample
/// * `group2` - Second sample
/// * `config` - Directionality, significance level and tail
///
/// # Returns
///
/// `TTestResult` with `t = (x̄₁ − x̄₂) / √(s²ₚ/n₁ + s²ₚ/n₂)` and `n₁ + n₂ − 2` degrees of freedom.
pub fn t_test_independent<T>(
    group1: &[T],
    group2: &[T],
    config: &TTestConfig,
) -> Result<TTestResult>
where
    T: FloatOps,
{
    if group1.is_empty() || group2.is_empty() {
        return Err(StatsError::input("samples cannot be empty"));
    }
    if group1.len() + group2.len() <= 2 {
        return Err(StatsError::input(
            "independent samples t-test needs more than two observations in total",
        ));
    }

    let n1 = group1.len() as f64;
    let n2 = group2.len() as f64;
    let df = group1.len() + group2.len() - 2;
    let critical_value = find_critical_value(config.directional, config.significance, df)?;

    let mean1 = mean(group1)?;
    let mean2 = mean(group2)?;

    let pooled_var = pooled_variance(group1, group2)?;
    let standard_error = (pooled_var / n1 + pooled_var / n2).sqrt();
    if standard_error == 0.0 {
        return Err(StatsError::input(
            "standard error is zero, both samples have no variance",
        ));
    }

    let t = (mean1 - mean2) / standard_error;
    trace!(
        n1 = group1.len(),
        n2 = group2.len(),
        mean1,
        mean2,
        pooled_var,
        "independent samples t-test"
    );

    let result = TTestResult::new(t, critical_value, df, *config)
        .with_standard_error(standard_error)
        .with_p_value(t_test_p_value(t, df, config));
    let result = match cohens_d(group1, group2) {
        Ok(d) => result.with_effect_size(d),
        Err(_) => result,
    };

    log_verdict(&result);
    Ok(result)
}

/// p-value of a t statistic for the tails selected by `config`.
///
/// Directional tests report the probability of the configured tail only; non-directional
/// tests report both tails.
pub fn t_test_p_value(t_stat: f64, df: usize, config: &TTestConfig) -> f64 {
    if t_stat.is_nan() || df == 0 {
        return f64::NAN;
    }

    let Ok(t_dist) = StudentsT::new(0.0, 1.0, df as f64) else {
        return f64::NAN;
    };

    if config.directional {
        match config.sensitivity {
            Sensitivity::Right => t_dist.sf(t_stat),
            Sensitivity::Left => t_dist.cdf(t_stat),
        }
    } else {
        (2.0 * t_dist.sf(t_stat.abs())).min(1.0)
    }
}

fn log_verdict(result: &TTestResult) {
    debug!(
        t = result.statistic,
        critical_value = result.critical_value,
        df = result.degrees_of_freedom,
        p_value = result.p_value,
        significant = result.significant,
        "{}",
        result.message()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Significance;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_sample_mean_equals_hypothesis() {
        let config = TTestConfig::non_directional(Significance::P05);
        let result = t_test_single(&[300.0, 250.0, 200.0], 250.0, &config).unwrap();

        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.degrees_of_freedom, 2);
        assert_eq!(result.critical_value, 4.303);
        assert!(!result.significant);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_sample_known_t() {
        // mean 200, s 100, se 100/sqrt(3)
        let config = TTestConfig::non_directional(Significance::P05);
        let result = t_test_single(&[100.0, 200.0, 300.0], 175.0, &config).unwrap();

        let expected = 25.0 / (100.0 / 3.0f64.sqrt());
        assert_abs_diff_eq!(result.statistic, expected, epsilon = 1e-9);
        assert!(result.statistic.is_finite());
        assert!(!result.significant);
    }

    #[test]
    fn test_single_sample_directional_tails() {
        let data = [12.0, 14.0, 13.0, 15.0, 14.0, 13.0, 16.0, 15.0];

        let right = TTestConfig::directional(Significance::P05, Sensitivity::Right);
        let result = t_test_single(&data, 10.0, &right).unwrap();
        assert!(result.statistic > 0.0);
        assert!(result.significant);
        assert_eq!(result.critical_value, 1.895);
        assert!(result.p_value < 0.05);

        // Same data, opposite tail
        let left = TTestConfig::directional(Significance::P05, Sensitivity::Left);
        let result = t_test_single(&data, 10.0, &left).unwrap();
        assert!(!result.significant);
        assert!(result.p_value > 0.95);

        let result = t_test_single(&data, 20.0, &left).unwrap();
        assert!(result.statistic < 0.0);
        assert!(result.significant);
    }

    #[test]
    fn test_single_sample_preconditions() {
        let config = TTestConfig::default();
        assert!(matches!(
            t_test_single(&[1.0], 0.0, &config),
            Err(StatsError::InvalidInput(_))
        ));
        assert!(matches!(
            t_test_single(&[3.0, 3.0, 3.0], 1.0, &config),
            Err(StatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_independent_equal_means() {
        let config = TTestConfig::non_directional(Significance::P05);
        let result = t_test_independent(&[1.0, 2.0, 3.0], &[2.0, 2.0, 2.0], &config).unwrap();

        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.degrees_of_freedom, 4);
        assert_eq!(result.critical_value, 2.776);
        assert!(!result.significant);
    }

    #[test]
    fn test_independent_known_values() {
        // means 12 and 13, SS 14 and 2, pooled 4, se sqrt(8/3)
        let config = TTestConfig::non_directional(Significance::P01);
        let result = t_test_independent(&[11.0, 15.0, 10.0], &[13.0, 12.0, 14.0], &config).unwrap();

        let expected = -1.0 / (8.0f64 / 3.0).sqrt();
        assert_abs_diff_eq!(result.statistic, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(result.standard_error, (8.0f64 / 3.0).sqrt(), epsilon = 1e-9);
        assert_eq!(result.critical_value, 4.604);
        assert!(!result.significant);
        assert!(result.effect_size.is_some());
    }

    #[test]
    fn test_independent_clear_difference() {
        let group1 = [2.0, 2.2, 1.8, 2.1, 1.9];
        let group2 = [8.0, 7.5, 8.5, 8.1, 7.9];

        let config = TTestConfig::non_directional(Significance::P001);
        let result = t_test_independent(&group1, &group2, &config).unwrap();
        assert!(result.statistic < -20.0);
        assert!(result.significant);
        assert!(result.p_value < 0.001);

        let right = TTestConfig::directional(Significance::P05, Sensitivity::Right);
        assert!(!t_test_independent(&group1, &group2, &right).unwrap().significant);
        assert!(t_test_independent(&group2, &group1, &right).unwrap().significant);
    }

    #[test]
    fn test_independent_preconditions() {
        let config = TTestConfig::default();
        let empty: [f64; 0] = [];
        assert!(t_test_independent(&empty, &[1.0, 2.0, 3.0], &config).is_err());
        assert!(t_test_independent(&[1.0], &[2.0], &config).is_err());
        assert!(t_test_independent(&[1.0, 1.0], &[1.0, 1.0], &config).is_err());
    }

    #[test]
    fn test_large_samples_use_truncated_rows() {
        let group1: Vec<f64> = (0..30).map(|i| (i % 7) as f64).collect();
        let group2: Vec<f64> = (0..25).map(|i| (i % 5) as f64 + 0.5).collect();

        let config = TTestConfig::non_directional(Significance::P05);
        let result = t_test_independent(&group1, &group2, &config).unwrap();
        assert_eq!(result.degrees_of_freedom, 53);
        assert_eq!(result.critical_value, 2.021);
    }

    #[test]
    fn test_p_value_tails() {
        let two = TTestConfig::non_directional(Significance::P05);
        let right = TTestConfig::directional(Significance::P05, Sensitivity::Right);
        let left = TTestConfig::directional(Significance::P05, Sensitivity::Left);

        let p_two = t_test_p_value(2.0, 10, &two);
        let p_right = t_test_p_value(2.0, 10, &right);
        let p_left = t_test_p_value(2.0, 10, &left);

        assert_abs_diff_eq!(p_two, 2.0 * p_right, epsilon = 1e-12);
        assert_abs_diff_eq!(p_left + p_right, 1.0, epsilon = 1e-12);
        assert!(t_test_p_value(f64::NAN, 10, &two).is_nan());
    }

    #[test]
    fn test_repeated_calls_identical() {
        let config = TTestConfig::directional(Significance::P01, Sensitivity::Left);
        let a = [4.1, 3.9, 5.2, 4.4];
        let b = [5.0, 5.5, 6.1, 5.8, 5.2];
        let first = t_test_independent(&a, &b, &config).unwrap();
        let second = t_test_independent(&a, &b, &config).unwrap();
        assert_eq!(first, second);
    }
}
