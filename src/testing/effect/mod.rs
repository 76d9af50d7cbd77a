use crate::descriptive::{mean, pooled_variance, sample_std_dev};
use crate::error::{Result, StatsError};
use single_utilities::traits::FloatOps;

/// Calculate Cohen's d for a single sample against a hypothesized mean
pub fn cohens_d_single<T>(data: &[T], hypothesized_mean: f64) -> Result<f64>
where
    T: FloatOps,
{
    let s = sample_std_dev(data)?;
    if s == 0.0 {
        return Err(StatsError::input(
            "Cohen's d is undefined for a sample without variance",
        ));
    }

    Ok((mean(data)? - hypothesized_mean) / s)
}

/// Calculate Cohen's d for two independent samples using the pooled standard deviation
pub fn cohens_d<T>(group1: &[T], group2: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    let pooled_sd = pooled_variance(group1, group2)?.sqrt();
    if pooled_sd == 0.0 {
        return Err(StatsError::input(
            "Cohen's d is undefined when both samples are constant",
        ));
    }

    let mean1 = mean(group1)?;
    let mean2 = mean(group2)?;

    Ok((mean1 - mean2) / pooled_sd)
}

/// Calculate Hedge's g (bias-corrected effect size)
pub fn hedges_g<T>(group1: &[T], group2: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    let d = cohens_d(group1, group2)?;

    let n = (group1.len() + group2.len()) as f64;

    // Correction factor J
    let j = 1.0 - 3.0 / (4.0 * (n - 2.0) - 1.0);

    Ok(j * d)
}
