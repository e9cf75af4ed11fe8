use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_GRADE: f64 = 1.75;
pub const DEFAULT_UNITS: i64 = 3;

/// Stable handle for a row in a [`RowController`](crate::core::controller::RowController).
///
/// Ids are never reused, so a removed row's id stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, rename = "sub_code")]
    pub subject_code: String,
    pub grade: f64,
    pub units: i64,
}

impl Row {
    pub fn new(grade: f64, units: i64) -> Self {
        Self {
            subject_code: String::new(),
            grade,
            units,
        }
    }

    pub fn with_subject_code(mut self, code: impl Into<String>) -> Self {
        self.subject_code = code.into();
        self
    }

    pub fn weight(&self) -> f64 {
        self.grade * self.units as f64
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new(DEFAULT_GRADE, DEFAULT_UNITS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    #[serde(rename = "President's Lister (Maybe)")]
    PresidentsLister,
    #[serde(rename = "Dean's Lister (Maybe)")]
    DeansLister,
    #[serde(rename = "---")]
    Unclassified,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Standing::PresidentsLister => "President's Lister (Maybe)",
            Standing::DeansLister => "Dean's Lister (Maybe)",
            Standing::Unclassified => "---",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub total_units: f64,
    pub weighted_sum: f64,
    pub raw_average: f64,
    pub rounded_average: f64,
    pub has_failing_grade: bool,
    pub standing: Standing,
}

impl ResultSet {
    /// False when the rows carried no usable units and the averages are NaN or infinite.
    pub fn is_defined(&self) -> bool {
        self.raw_average.is_finite()
    }
}

/// The three destinations a calculation writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputField {
    TotalWeight,
    WeightedAverage,
    Class,
}

impl OutputField {
    pub const ALL: [OutputField; 3] = [
        OutputField::TotalWeight,
        OutputField::WeightedAverage,
        OutputField::Class,
    ];

    pub fn attribute_name(&self) -> &'static str {
        match self {
            OutputField::TotalWeight => "total-weight-result",
            OutputField::WeightedAverage => "weighted-average-result",
            OutputField::Class => "class-result",
        }
    }

    pub fn from_attribute_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.attribute_name() == name)
    }
}

/// Names of the host fields that receive each result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBindings {
    pub total_weight_result: String,
    pub weighted_average_result: String,
    pub class_result: String,
}

impl FieldBindings {
    pub fn field_name(&self, field: OutputField) -> &str {
        match field {
            OutputField::TotalWeight => &self.total_weight_result,
            OutputField::WeightedAverage => &self.weighted_average_result,
            OutputField::Class => &self.class_result,
        }
    }

    /// Rebinds one output by its attribute name. Unknown attributes are ignored.
    pub fn set_attribute(&mut self, attribute: &str, value: impl Into<String>) -> bool {
        let slot = match OutputField::from_attribute_name(attribute) {
            Some(OutputField::TotalWeight) => &mut self.total_weight_result,
            Some(OutputField::WeightedAverage) => &mut self.weighted_average_result,
            Some(OutputField::Class) => &mut self.class_result,
            None => return false,
        };
        *slot = value.into();
        true
    }
}

impl Default for FieldBindings {
    fn default() -> Self {
        Self {
            total_weight_result: "total-units".to_string(),
            weighted_average_result: "gwa".to_string(),
            class_result: "standing".to_string(),
        }
    }
}
