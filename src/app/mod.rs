pub mod session;

use crate::adapters::sink::DocumentSink;
use crate::core::calculator::Calculator;
use crate::core::controller::RowController;
use crate::domain::model::{ResultSet, Row};
use crate::domain::ports::{ConfigProvider, ResultSink};
use crate::utils::error::{GwaError, Result};
use crate::utils::validation::{parse_grade, parse_units};
use serde::Serialize;
use std::collections::BTreeMap;

/// One calculation together with the values each bound field received.
#[derive(Debug, Clone, Serialize)]
pub struct CalcReport {
    pub rows: Vec<Row>,
    pub result: ResultSet,
    pub fields: BTreeMap<String, String>,
}

/// Builds a controller whose policy, row defaults and sink come from the host.
pub fn build_controller<C: ConfigProvider, S: ResultSink>(config: &C, sink: S) -> RowController<S> {
    RowController::with_settings(
        sink,
        Calculator::new(config.grading_policy()),
        config.row_template(),
    )
}

pub fn calculate_report<C: ConfigProvider>(config: &C, rows: Vec<Row>) -> Result<CalcReport> {
    let sink = DocumentSink::new(config.field_bindings().clone());
    let mut controller = build_controller(config, sink);
    controller.load_rows(rows);
    let result = controller.calculate()?;
    let rows = controller.rows();
    let fields = controller.into_sink().fields().clone();
    Ok(CalcReport {
        rows,
        result,
        fields,
    })
}

/// Parses `GRADE:UNITS` or `GRADE:UNITS:CODE`.
pub fn parse_row_spec(spec: &str) -> Result<Row> {
    let mut parts = spec.splitn(3, ':');
    let (Some(grade), Some(units)) = (parts.next(), parts.next()) else {
        return Err(GwaError::ValidationError {
            message: format!("row '{}' must look like GRADE:UNITS[:CODE]", spec),
        });
    };
    let row = Row::new(parse_grade(grade)?, parse_units(units)?);
    Ok(match parts.next() {
        Some(code) => row.with_subject_code(code.trim()),
        None => row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::config::toml_config::GwaConfig;

    #[test]
    fn test_parse_row_spec() {
        assert_eq!(parse_row_spec("1.25:3").unwrap(), Row::new(1.25, 3));
        assert_eq!(
            parse_row_spec("1:5:CS 11").unwrap(),
            Row::new(1.0, 5).with_subject_code("CS 11")
        );
        assert!(parse_row_spec("1.25").is_err());
        assert!(parse_row_spec("a:3").is_err());
        assert!(parse_row_spec("1.25:b").is_err());
    }

    #[test]
    fn test_build_controller_uses_config() {
        let config = GwaConfig::from_toml_str("[defaults]\ngrade = 1.0\nunits = 2\n").unwrap();
        let mut controller = build_controller(&config, MemorySink::default());
        assert_eq!(controller.rows(), vec![Row::new(1.0, 2)]);
        controller.add_row();
        assert_eq!(controller.rows()[1], Row::new(1.0, 2));
    }

    #[test]
    fn test_report_fields_follow_bindings() {
        let config = GwaConfig::from_toml_str(
            "[bindings]\ntotal_weight_result = \"units-box\"\n",
        )
        .unwrap();
        let report = calculate_report(&config, vec![Row::new(1.0, 3)]).unwrap();
        assert_eq!(report.fields.get("units-box").map(String::as_str), Some("3"));
        assert_eq!(
            report.fields.get("gwa").map(String::as_str),
            Some("1.000000 (rounded as 1)")
        );
        assert_eq!(
            report.fields.get("standing").map(String::as_str),
            Some("President's Lister (Maybe)")
        );
    }
}
