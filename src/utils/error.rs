use thiserror::Error;

#[derive(Error, Debug)]
pub enum GwaError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid number for '{field}': '{input}'")]
    InvalidNumber { field: String, input: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Row {id} does not exist")]
    UnknownRow { id: u64 },

    #[error("Row {id} is the first row and cannot be removed")]
    PermanentRow { id: u64 },

    #[error("Unrecognised command: {input}")]
    UnknownCommand { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Rows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GwaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GwaError::CsvError(_) | GwaError::IoError(_) | GwaError::SerializationError(_) => {
                ErrorCategory::Io
            }
            GwaError::ConfigError { .. } | GwaError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            GwaError::InvalidNumber { .. }
            | GwaError::ValidationError { .. }
            | GwaError::UnknownCommand { .. } => ErrorCategory::Input,
            GwaError::UnknownRow { .. } | GwaError::PermanentRow { .. } => ErrorCategory::Rows,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Rows => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GwaError::CsvError(_) => "Check that the rows file has a 'sub_code,grade,units' header",
            GwaError::IoError(_) => "Check that the file exists and is readable",
            GwaError::SerializationError(_) => "Try the text output format instead",
            GwaError::ConfigError { .. } | GwaError::InvalidConfigValueError { .. } => {
                "Review the configuration file values"
            }
            GwaError::InvalidNumber { .. } => "Enter a plain decimal number such as 1.75",
            GwaError::ValidationError { .. } => {
                "Use grades from 1 to 5 in steps of 0.25 and 1 to 16 units, or pass --no-validate"
            }
            GwaError::UnknownRow { .. } => "Run 'list' to see the current row ids",
            GwaError::PermanentRow { .. } => "Edit the first row instead of removing it",
            GwaError::UnknownCommand { .. } => "Type 'help' for the list of commands",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input | ErrorCategory::Rows => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GwaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_errors_are_low_severity() {
        let err = GwaError::PermanentRow { id: 0 };
        assert_eq!(err.category(), ErrorCategory::Rows);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(
            err.user_friendly_message(),
            "Row 0 is the first row and cannot be removed"
        );
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = GwaError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().starts_with("Could not read input"));
    }
}
