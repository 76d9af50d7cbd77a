use crate::error::{Result, StatsError};
use std::fmt;
use std::str::FromStr;

pub mod critical;
pub mod effect;
pub mod inference;

/// Message reported when the null hypothesis is rejected.
pub const SIGNIFICANT_MESSAGE: &str =
    "Congrats! The results are significant. Reject the null hypothesis";
/// Message reported when the null hypothesis is retained.
pub const NOT_SIGNIFICANT_MESSAGE: &str =
    "Darn it! The results are not significant. Fail to reject the null hypothesis";

/// Supported levels of significance (alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Significance {
    #[default]
    P05,
    P01,
    P001,
}

impl Significance {
    pub const ALL: [Significance; 3] = [Significance::P05, Significance::P01, Significance::P001];

    pub fn alpha(self) -> f64 {
        match self {
            Significance::P05 => 0.05,
            Significance::P01 => 0.01,
            Significance::P001 => 0.001,
        }
    }
}

impl TryFrom<f64> for Significance {
    type Error = StatsError;

    fn try_from(alpha: f64) -> Result<Self> {
        Significance::ALL
            .into_iter()
            .find(|s| s.alpha() == alpha)
            .ok_or_else(|| {
                StatsError::parameter(format!(
                    "significance level {alpha} is not one of .05, .01, .001"
                ))
            })
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alpha())
    }
}

/// Tail examined by a directional (one-tailed) test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sensitivity {
    Left,
    #[default]
    Right,
}

impl FromStr for Sensitivity {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Sensitivity::Left),
            "right" => Ok(Sensitivity::Right),
            other => Err(StatsError::parameter(format!(
                "sensitivity must be \"left\" or \"right\", got \"{other}\""
            ))),
        }
    }
}

/// Options shared by the t-tests.
///
/// The default is a non-directional test at the .05 level; `sensitivity` is only
/// consulted when `directional` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TTestConfig {
    pub directional: bool,
    pub significance: Significance,
    pub sensitivity: Sensitivity,
}

impl TTestConfig {
    pub fn new(directional: bool, significance: Significance) -> Self {
        TTestConfig {
            directional,
            significance,
            sensitivity: Sensitivity::default(),
        }
    }

    /// One-tailed test on the given tail.
    pub fn directional(significance: Significance, sensitivity: Sensitivity) -> Self {
        TTestConfig {
            directional: true,
            significance,
            sensitivity,
        }
    }

    /// Two-tailed test.
    pub fn non_directional(significance: Significance) -> Self {
        TTestConfig::new(false, significance)
    }

    pub fn with_significance(mut self, significance: Significance) -> Self {
        self.significance = significance;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Apply the decision rule for this configuration.
    pub fn is_significant(&self, t: f64, critical_value: f64) -> bool {
        is_significant(t, critical_value, self.directional, self.sensitivity)
    }
}

/// Compare a t statistic against its critical value.
///
/// Directional tests only reject on the configured tail; non-directional tests compare `|t|`.
pub fn is_significant(
    t: f64,
    critical_value: f64,
    directional: bool,
    sensitivity: Sensitivity,
) -> bool {
    if directional {
        match sensitivity {
            Sensitivity::Left => t < 0.0 && t <= -critical_value,
            Sensitivity::Right => t > 0.0 && t >= critical_value,
        }
    } else {
        t.abs() >= critical_value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TTestResult {
    /// The t ratio
    pub statistic: f64,
    /// Table value the statistic is compared against
    pub critical_value: f64,
    pub degrees_of_freedom: usize,
    /// Estimated standard error used as the denominator of `statistic`
    pub standard_error: f64,
    /// p-value from the Student's t distribution for the configured tails
    pub p_value: f64,
    /// Cohen's d (if calculated)
    pub effect_size: Option<f64>,
    /// Outcome of the critical value comparison
    pub significant: bool,
    pub config: TTestConfig,
}

impl TTestResult {
    /// Build a result and apply the decision rule.
    pub fn new(
        statistic: f64,
        critical_value: f64,
        degrees_of_freedom: usize,
        config: TTestConfig,
    ) -> Self {
        TTestResult {
            statistic,
            critical_value,
            degrees_of_freedom,
            standard_error: f64::NAN,
            p_value: f64::NAN,
            effect_size: None,
            significant: config.is_significant(statistic, critical_value),
            config,
        }
    }

    pub fn with_standard_error(mut self, se: f64) -> Self {
        self.standard_error = se;
        self
    }

    pub fn with_p_value(mut self, p_value: f64) -> Self {
        self.p_value = p_value;
        self
    }

    pub fn with_effect_size(mut self, effect_size: f64) -> Self {
        self.effect_size = Some(effect_size);
        self
    }

    /// Verdict line for this result.
    pub fn message(&self) -> &'static str {
        if self.significant {
            SIGNIFICANT_MESSAGE
        } else {
            NOT_SIGNIFICANT_MESSAGE
        }
    }
}

impl fmt::Display for TTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message())?;
        // `{:?}` keeps the trailing `.0` on whole table values (2.0, not 2)
        write!(f, "Critical Value = {:?}", self.critical_value)
    }
}
