use crate::core::calculator::GradingPolicy;
use crate::domain::model::{FieldBindings, Row, DEFAULT_GRADE, DEFAULT_UNITS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GwaError, Result};
use crate::utils::validation::{validate_non_empty_string, RowConstraints, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GwaConfig {
    pub grading: GradingPolicy,
    pub defaults: RowDefaults,
    pub bindings: FieldBindings,
    pub validation: RowConstraints,
}

/// Values given to newly added rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowDefaults {
    pub grade: f64,
    pub units: i64,
}

impl Default for RowDefaults {
    fn default() -> Self {
        Self {
            grade: DEFAULT_GRADE,
            units: DEFAULT_UNITS,
        }
    }
}

impl GwaConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GwaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GwaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GwaError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let grading = &self.grading;
        for (field, value) in [
            ("grading.failing_grade", grading.failing_grade),
            ("grading.presidents_list_max", grading.presidents_list_max),
            ("grading.deans_list_max", grading.deans_list_max),
            ("defaults.grade", self.defaults.grade),
        ] {
            if !value.is_finite() {
                return Err(GwaError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: "must be a finite number".to_string(),
                });
            }
        }

        if grading.presidents_list_max > grading.deans_list_max {
            return Err(GwaError::InvalidConfigValueError {
                field: "grading.presidents_list_max".to_string(),
                value: grading.presidents_list_max.to_string(),
                reason: format!(
                    "must not exceed grading.deans_list_max ({})",
                    grading.deans_list_max
                ),
            });
        }

        validate_non_empty_string("bindings.total_weight_result", &self.bindings.total_weight_result)?;
        validate_non_empty_string(
            "bindings.weighted_average_result",
            &self.bindings.weighted_average_result,
        )?;
        validate_non_empty_string("bindings.class_result", &self.bindings.class_result)?;

        self.validation.validate()?;
        self.validation
            .check_row(0, &self.row_template())
            .map_err(|e| GwaError::InvalidConfigValueError {
                field: "defaults".to_string(),
                value: format!("{}/{}", self.defaults.grade, self.defaults.units),
                reason: e.to_string(),
            })
    }
}

impl ConfigProvider for GwaConfig {
    fn grading_policy(&self) -> GradingPolicy {
        self.grading
    }

    fn row_template(&self) -> Row {
        Row::new(self.defaults.grade, self.defaults.units)
    }

    fn field_bindings(&self) -> &FieldBindings {
        &self.bindings
    }

    fn row_constraints(&self) -> RowConstraints {
        self.validation
    }
}

impl Validate for GwaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
