use crate::core::calculator::GradingPolicy;
use crate::domain::model::{FieldBindings, OutputField, Row};
use crate::utils::error::Result;
use crate::utils::validation::RowConstraints;

/// Host-side destination for calculation results.
pub trait ResultSink {
    fn write(&mut self, field: OutputField, value: &str) -> Result<()>;
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn write(&mut self, field: OutputField, value: &str) -> Result<()> {
        (**self).write(field, value)
    }
}

pub trait ConfigProvider {
    fn grading_policy(&self) -> GradingPolicy;
    fn row_template(&self) -> Row;
    fn field_bindings(&self) -> &FieldBindings;
    fn row_constraints(&self) -> RowConstraints;
}

/// Anything that can hand over an initial set of rows.
pub trait RowSource {
    fn read_rows(&mut self) -> Result<Vec<Row>>;
}
