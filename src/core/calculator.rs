use crate::domain::model::{ResultSet, Row, Standing};
use serde::{Deserialize, Serialize};

/// Thresholds used to classify a weighted average.
///
/// The defaults are the ones the calculator has always shipped with. Note that
/// `failing_grade` is inclusive: any single row graded at or above it forces
/// [`Standing::Unclassified`], whatever the average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingPolicy {
    pub failing_grade: f64,
    pub presidents_list_max: f64,
    pub deans_list_max: f64,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            failing_grade: 2.25,
            presidents_list_max: 1.25,
            deans_list_max: 1.75,
        }
    }
}

impl GradingPolicy {
    pub fn classify(&self, average: f64, has_failing_grade: bool) -> Standing {
        if has_failing_grade {
            return Standing::Unclassified;
        }
        // NaN compares false on both arms.
        if average <= self.presidents_list_max {
            Standing::PresidentsLister
        } else if average <= self.deans_list_max {
            Standing::DeansLister
        } else {
            Standing::Unclassified
        }
    }

    pub fn is_failing(&self, grade: f64) -> bool {
        grade >= self.failing_grade
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    policy: GradingPolicy,
}

impl Calculator {
    pub fn new(policy: GradingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GradingPolicy {
        &self.policy
    }

    /// Computes the weighted average of `rows`. Never fails: empty input or
    /// zero total units yields NaN averages and [`Standing::Unclassified`].
    pub fn compute(&self, rows: &[Row]) -> ResultSet {
        // Summed as f64 so very large unit counts cannot overflow.
        let total_units: f64 = rows.iter().map(|r| r.units as f64).sum();
        let weighted_sum: f64 = rows.iter().map(Row::weight).sum();
        let has_failing_grade = rows.iter().any(|r| self.policy.is_failing(r.grade));

        let raw_average = weighted_sum / total_units;
        let rounded_average = round_half_up(raw_average, 2);

        let standing = self.policy.classify(raw_average, has_failing_grade);

        tracing::debug!(
            rows = rows.len(),
            total_units,
            weighted_sum,
            raw_average,
            "computed weighted average"
        );

        ResultSet {
            total_units,
            weighted_sum,
            raw_average,
            rounded_average,
            has_failing_grade,
            standing,
        }
    }
}

/// Shorthand for [`Calculator::compute`] with the default policy.
pub fn compute(rows: &[Row]) -> ResultSet {
    Calculator::default().compute(rows)
}

/// Rounds to `decimals` places, ties toward positive infinity.
///
/// `f64::EPSILON` is added first so values that print as an exact `.5` tie
/// but are stored just below it (`1.005`) still round up.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = (value + f64::EPSILON) * scale;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / scale
}
