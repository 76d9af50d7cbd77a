//! Pearson's correlation coefficient.
//!
//! ## Example
//!
//! ```rust
//! use intro_stats::correlation::pearson_correlation;
//!
//! let r = pearson_correlation(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(r, 1.0);
//! ```

use crate::descriptive::{sum_of_products, sum_of_squares};
use crate::error::{Result, StatsError};
use single_utilities::traits::FloatOps;
use tracing::debug;

pub mod plot;

pub use plot::ScatterPlot;

/// Pearson's r, `SPxy / √(SSx · SSy)`.
///
/// # Errors
///
/// * [`StatsError::LengthMismatch`] when the series differ in length
/// * [`StatsError::InvalidInput`] when they are empty or either one is constant
pub fn pearson_correlation<T>(x: &[T], y: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let sp_xy = sum_of_products(x, y)?;
    let ss_x = sum_of_squares(x)?;
    let ss_y = sum_of_squares(y)?;

    let denom = (ss_x * ss_y).sqrt();
    if denom == 0.0 {
        return Err(StatsError::input(
            "correlation is undefined when either series is constant",
        ));
    }

    let r = sp_xy / denom;
    debug!(n = x.len(), sp_xy, ss_x, ss_y, r, "pearson correlation");
    Ok(r)
}

/// Compute Pearson's r and the scatter plot of the two series.
///
/// The plot is returned instead of drawn so the caller decides where it goes; see
/// [`ScatterPlot::write_to`].
pub fn correlate_and_plot<T>(x: &[T], y: &[T]) -> Result<(f64, ScatterPlot)>
where
    T: FloatOps,
{
    let r = pearson_correlation(x, y)?;
    let plot = ScatterPlot::from_samples(x, y)?;
    Ok((r, plot))
}
