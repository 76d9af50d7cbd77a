//! Descriptive helpers shared by the correlation and t-test code.
//!
//! All helpers take borrowed samples of any [`FloatOps`] element type, convert them to
//! `f64` once and never mutate them.

use crate::error::{Result, StatsError};
use num_traits::ToPrimitive;
use single_utilities::traits::FloatOps;
use statrs::statistics::Statistics;

/// Convert a sample to `f64`, rejecting values that have no finite `f64` form.
pub fn to_f64_vec<T>(values: &[T]) -> Result<Vec<f64>>
where
    T: FloatOps,
{
    values
        .iter()
        .map(|v| {
            ToPrimitive::to_f64(v)
                .filter(|x| x.is_finite())
                .ok_or_else(|| StatsError::input("sample contains a non-finite value"))
        })
        .collect()
}

/// Sum of squared deviations from the mean, `Σx² − (Σx)²/n`.
///
/// Evaluated as `Σ(x − x̄)²`, which is algebraically identical and does not cancel
/// catastrophically for large values. A constant sample yields exactly zero.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`] for an empty sample.
pub fn sum_of_squares<T>(values: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    if values.is_empty() {
        return Err(StatsError::input("sum of squares needs at least one value"));
    }

    let data = to_f64_vec(values)?;
    let first = data[0];
    if data.iter().all(|&x| x == first) {
        return Ok(0.0);
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    Ok(data.iter().map(|&x| (x - mean).powi(2)).sum())
}

/// Sum of cross products, `Σxy − (Σx·Σy)/n`.
pub fn sum_of_products<T>(x: &[T], y: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::input("sum of products needs at least one pair"));
    }

    let xs = to_f64_vec(x)?;
    let ys = to_f64_vec(y)?;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    for (&a, &b) in xs.iter().zip(&ys) {
        sum_x += a;
        sum_y += b;
        sum_xy += a * b;
    }
    let n = xs.len() as f64;

    Ok(sum_xy - sum_x * sum_y / n)
}

/// Arithmetic mean.
pub fn mean<T>(values: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    if values.is_empty() {
        return Err(StatsError::input("mean of an empty sample"));
    }
    Ok(to_f64_vec(values)?.mean())
}

/// Sample standard deviation (n − 1 denominator).
pub fn sample_std_dev<T>(values: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    if values.len() < 2 {
        return Err(StatsError::input(
            "standard deviation needs at least two values",
        ));
    }
    Ok(to_f64_vec(values)?.std_dev())
}

/// Pooled variance of two independent samples, `(SS₁ + SS₂)/(n₁ + n₂ − 2)`.
pub fn pooled_variance<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    if a.is_empty() || b.is_empty() {
        return Err(StatsError::input("pooled variance needs two non-empty samples"));
    }
    if a.len() + b.len() <= 2 {
        return Err(StatsError::input(
            "pooled variance needs more than two observations in total",
        ));
    }

    let df = (a.len() + b.len() - 2) as f64;
    Ok((sum_of_squares(a)? + sum_of_squares(b)?) / df)
}

/// Estimated standard error of the mean, `s/√n`.
pub fn standard_error_of_mean<T>(values: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    let s = sample_std_dev(values)?;
    Ok(s / (values.len() as f64).sqrt())
}

/// Estimated standard error of the difference between two means under a pooled variance.
pub fn standard_error_of_difference<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    let pooled = pooled_variance(a, b)?;
    Ok((pooled / a.len() as f64 + pooled / b.len() as f64).sqrt())
}
