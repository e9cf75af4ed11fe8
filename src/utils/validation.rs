use crate::domain::model::Row;
use crate::utils::error::{GwaError, Result};
use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a grade as typed into a form field. Surrounding whitespace is ignored;
/// anything that is not a finite decimal number is rejected.
pub fn parse_grade(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GwaError::InvalidNumber {
            field: "grade".to_string(),
            input: input.to_string(),
        }),
    }
}

pub fn parse_units(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| GwaError::InvalidNumber {
            field: "units".to_string(),
            input: input.to_string(),
        })
}

/// The limits a form places on a row's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowConstraints {
    pub enabled: bool,
    pub grade_min: f64,
    pub grade_max: f64,
    pub grade_step: f64,
    pub units_min: i64,
    pub units_max: i64,
}

impl Default for RowConstraints {
    fn default() -> Self {
        Self {
            enabled: true,
            grade_min: 1.0,
            grade_max: 5.0,
            grade_step: 0.25,
            units_min: 1,
            units_max: 16,
        }
    }
}

impl RowConstraints {
    pub fn check_row(&self, index: usize, row: &Row) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let label = format!("rows[{}]", index);
        validate_range(&format!("{}.grade", label), row.grade, self.grade_min, self.grade_max)?;
        validate_step(&format!("{}.grade", label), row.grade, self.grade_min, self.grade_step)?;
        validate_range(&format!("{}.units", label), row.units, self.units_min, self.units_max)?;
        Ok(())
    }

    pub fn check_rows(&self, rows: &[Row]) -> Result<()> {
        rows.iter()
            .enumerate()
            .try_for_each(|(index, row)| self.check_row(index, row))
    }
}

impl Validate for RowConstraints {
    fn validate(&self) -> Result<()> {
        if !(self.grade_min <= self.grade_max) {
            return Err(GwaError::InvalidConfigValueError {
                field: "validation.grade_min".to_string(),
                value: self.grade_min.to_string(),
                reason: format!("must not exceed grade_max ({})", self.grade_max),
            });
        }
        if !(self.grade_step >= 0.0) {
            return Err(GwaError::InvalidConfigValueError {
                field: "validation.grade_step".to_string(),
                value: self.grade_step.to_string(),
                reason: "step cannot be negative".to_string(),
            });
        }
        if self.units_min > self.units_max {
            return Err(GwaError::InvalidConfigValueError {
                field: "validation.units_min".to_string(),
                value: self.units_min.to_string(),
                reason: format!("must not exceed units_max ({})", self.units_max),
            });
        }
        Ok(())
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if !(value >= min && value <= max) {
        return Err(GwaError::ValidationError {
            message: format!(
                "{} = {} is outside the range {} to {}",
                field_name, value, min, max
            ),
        });
    }
    Ok(())
}

/// A step of zero disables the check.
pub fn validate_step(field_name: &str, value: f64, base: f64, step: f64) -> Result<()> {
    if step == 0.0 {
        return Ok(());
    }
    let steps = (value - base) / step;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(GwaError::ValidationError {
            message: format!("{} = {} is not a multiple of {}", field_name, value, step),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GwaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("1.75").unwrap(), 1.75);
        assert_eq!(parse_grade(" 2 ").unwrap(), 2.0);
        assert!(parse_grade("").is_err());
        assert!(parse_grade("abc").is_err());
        assert!(parse_grade("NaN").is_err());
        assert!(parse_grade("inf").is_err());
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("3").unwrap(), 3);
        assert_eq!(parse_units("-2").unwrap(), -2);
        assert!(parse_units("3.5").is_err());
    }

    #[test]
    fn test_row_constraints() {
        let constraints = RowConstraints::default();
        assert!(constraints.check_row(0, &Row::new(1.75, 3)).is_ok());
        assert!(constraints.check_row(0, &Row::new(5.0, 16)).is_ok());
        assert!(constraints.check_row(0, &Row::new(0.75, 3)).is_err());
        assert!(constraints.check_row(0, &Row::new(1.3, 3)).is_err());
        assert!(constraints.check_row(0, &Row::new(1.0, 17)).is_err());
        assert!(constraints.check_row(0, &Row::new(1.0, 0)).is_err());

        let disabled = RowConstraints {
            enabled: false,
            ..RowConstraints::default()
        };
        assert!(disabled.check_row(0, &Row::new(9.9, 0)).is_ok());
    }

    #[test]
    fn test_constraints_validate() {
        assert!(RowConstraints::default().validate().is_ok());
        let inverted = RowConstraints {
            units_min: 10,
            units_max: 1,
            ..RowConstraints::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("bindings.class_result", "standing").is_ok());
        assert!(validate_non_empty_string("bindings.class_result", "  ").is_err());
    }
}
