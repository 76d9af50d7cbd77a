//! Critical value lookup for Student's t-tests.
//!
//! Six fixed tables cover directional (one-tailed) and non-directional (two-tailed) tests at
//! the .05, .01 and .001 levels. Rows exist for 1 to 30 degrees of freedom, then 40, 60, 120
//! and infinity. Degrees of freedom between two rows are truncated to the lower row rather
//! than interpolated, so the reported critical value is always the more conservative one.

use crate::error::{Result, StatsError};
use crate::testing::Significance;
use std::fmt;
use tracing::debug;

mod tables;

pub(crate) const TABLE_LEN: usize = 34;

/// A row of the critical value tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRow {
    Finite(u32),
    Infinite,
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRow::Finite(df) => write!(f, "{df}"),
            TableRow::Infinite => f.write_str("inf"),
        }
    }
}

/// Row keys shared by every table, in storage order.
pub static TABLE_ROWS: [TableRow; TABLE_LEN] = {
    let mut rows = [TableRow::Infinite; TABLE_LEN];
    let mut i = 0;
    while i < 30 {
        rows[i] = TableRow::Finite(i as u32 + 1);
        i += 1;
    }
    rows[30] = TableRow::Finite(40);
    rows[31] = TableRow::Finite(60);
    rows[32] = TableRow::Finite(120);
    rows
};

/// An immutable column of critical values for one (directionality, significance) pair.
#[derive(Debug, Clone, Copy)]
pub struct CriticalValueTable {
    pub directional: bool,
    pub significance: Significance,
    values: &'static [f64; TABLE_LEN],
}

impl CriticalValueTable {
    /// Select the table for a test configuration.
    pub fn select(directional: bool, significance: Significance) -> Self {
        let values = match (directional, significance) {
            (false, Significance::P05) => &tables::NON_DIRECTIONAL_05,
            (false, Significance::P01) => &tables::NON_DIRECTIONAL_01,
            (false, Significance::P001) => &tables::NON_DIRECTIONAL_001,
            (true, Significance::P05) => &tables::DIRECTIONAL_05,
            (true, Significance::P01) => &tables::DIRECTIONAL_01,
            (true, Significance::P001) => &tables::DIRECTIONAL_001,
        };
        CriticalValueTable {
            directional,
            significance,
            values,
        }
    }

    /// Value stored at an exact row, `None` for rows the table does not list.
    ///
    /// Use [`lookup`](Self::lookup) to apply the lower-row truncation to arbitrary degrees of
    /// freedom.
    pub fn get(&self, row: TableRow) -> Option<f64> {
        let idx = match row {
            TableRow::Finite(df @ 1..=30) => df as usize - 1,
            TableRow::Finite(40) => 30,
            TableRow::Finite(60) => 31,
            TableRow::Finite(120) => 32,
            TableRow::Infinite => 33,
            TableRow::Finite(_) => return None,
        };
        Some(self.values[idx])
    }

    /// Iterate `(row, value)` pairs in table order.
    pub fn rows(&self) -> impl Iterator<Item = (TableRow, f64)> + '_ {
        TABLE_ROWS.iter().copied().zip(self.values.iter().copied())
    }

    /// Critical value for the given degrees of freedom, truncating to the lower row if needed.
    pub fn lookup(&self, degrees_of_freedom: usize) -> Result<f64> {
        let row = resolve_row(degrees_of_freedom)?;
        self.get(row)
            .ok_or_else(|| StatsError::parameter(format!("row {row} is not tabulated")))
    }
}

/// Map degrees of freedom onto the table row that serves it.
///
/// Exact rows are used as is. Otherwise (30, 40) uses 30, (40, 60) uses 40, (60, 120) uses 60,
/// (120, 200) uses 120 and anything from 200 upwards uses the infinite row.
pub fn resolve_row(degrees_of_freedom: usize) -> Result<TableRow> {
    let row = match degrees_of_freedom {
        0 => {
            return Err(StatsError::parameter(
                "degrees of freedom must be at least 1",
            ));
        }
        df @ 1..=30 => TableRow::Finite(df as u32),
        31..=39 => TableRow::Finite(30),
        40..=59 => TableRow::Finite(40),
        60..=119 => TableRow::Finite(60),
        120..=199 => TableRow::Finite(120),
        _ => TableRow::Infinite,
    };

    let tabulated = matches!(row, TableRow::Finite(r) if r as usize == degrees_of_freedom);
    if !tabulated {
        debug!(
            degrees_of_freedom,
            row = %row,
            "degrees of freedom not tabulated, truncating to lower row"
        );
    }
    Ok(row)
}

/// Find the critical value for a t-test.
///
/// # Arguments
///
/// * `directional` - Whether the test is one-tailed
/// * `significance` - Level of significance
/// * `degrees_of_freedom` - Degrees of freedom of the test statistic
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] when `degrees_of_freedom` is zero.
pub fn find_critical_value(
    directional: bool,
    significance: Significance,
    degrees_of_freedom: usize,
) -> Result<f64> {
    CriticalValueTable::select(directional, significance).lookup(degrees_of_freedom)
}

/// Same as [`find_critical_value`] but validates a raw alpha first.
pub fn find_critical_value_f64(
    directional: bool,
    significance: f64,
    degrees_of_freedom: usize,
) -> Result<f64> {
    find_critical_value(
        directional,
        Significance::try_from(significance)?,
        degrees_of_freedom,
    )
}
