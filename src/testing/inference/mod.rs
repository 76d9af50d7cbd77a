use crate::error::Result;
use crate::testing::{TTestConfig, TTestResult};
use single_utilities::traits::FloatOps;

pub mod parametric;

/// t-tests callable directly on a sample slice.
pub trait SampleTTests<T>
where
    T: FloatOps,
{
    fn t_test_single(&self, hypothesized_mean: f64, config: &TTestConfig) -> Result<TTestResult>;

    fn t_test_independent(&self, other: &[T], config: &TTestConfig) -> Result<TTestResult>;
}

impl<T> SampleTTests<T> for [T]
where
    T: FloatOps,
{
    fn t_test_single(&self, hypothesized_mean: f64, config: &TTestConfig) -> Result<TTestResult> {
        parametric::t_test_single(self, hypothesized_mean, config)
    }

    fn t_test_independent(&self, other: &[T], config: &TTestConfig) -> Result<TTestResult> {
        parametric::t_test_independent(self, other, config)
    }
}
