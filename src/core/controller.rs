use crate::core::calculator::Calculator;
use crate::core::format::render_field;
use crate::domain::model::{OutputField, ResultSet, Row, RowId};
use crate::domain::ports::ResultSink;
use crate::utils::error::{GwaError, Result};
use crate::utils::validation::{parse_grade, parse_units};

#[derive(Debug, Clone, PartialEq)]
pub struct RowEntry {
    pub id: RowId,
    pub row: Row,
}

/// List-backed model of the calculator form.
///
/// Always holds at least one row. The first row is permanent: it survives
/// [`clear`](Self::clear) with its values intact and cannot be removed.
pub struct RowController<S: ResultSink> {
    entries: Vec<RowEntry>,
    next_id: u64,
    template: Row,
    calculator: Calculator,
    sink: S,
}

impl<S: ResultSink> RowController<S> {
    pub fn new(sink: S) -> Self {
        Self::with_settings(sink, Calculator::default(), Row::default())
    }

    /// `template` supplies the values of the first row and of every added row.
    pub fn with_settings(sink: S, calculator: Calculator, template: Row) -> Self {
        Self {
            entries: vec![RowEntry {
                id: RowId(0),
                row: template.clone(),
            }],
            next_id: 1,
            template,
            calculator,
            sink,
        }
    }

    /// Replaces every row with `rows`. An empty list leaves a single default row.
    pub fn load_rows(&mut self, rows: Vec<Row>) {
        self.entries.truncate(1);
        let mut rows = rows.into_iter();
        let first = rows.next().unwrap_or_else(|| self.template.clone());
        self.entries[0].row = first;
        for row in rows {
            self.push(row);
        }
        tracing::debug!(rows = self.entries.len(), "loaded rows");
    }

    pub fn add_row(&mut self) -> RowId {
        let id = self.push(self.template.clone());
        tracing::debug!(%id, rows = self.entries.len(), "added row");
        id
    }

    fn push(&mut self, row: Row) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.entries.push(RowEntry { id, row });
        id
    }

    pub fn remove_row(&mut self, id: RowId) -> Result<Row> {
        if id == self.first_id() {
            return Err(GwaError::PermanentRow { id: id.0 });
        }
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        tracing::debug!(%id, rows = self.entries.len(), "removed row");
        Ok(entry.row)
    }

    /// Drops every row but the first, leaving the first row's values alone.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
        tracing::debug!("cleared rows");
    }

    pub fn set_subject_code(&mut self, id: RowId, code: impl Into<String>) -> Result<()> {
        self.row_mut(id)?.subject_code = code.into();
        Ok(())
    }

    pub fn set_grade(&mut self, id: RowId, grade: f64) -> Result<()> {
        self.row_mut(id)?.grade = grade;
        Ok(())
    }

    pub fn set_units(&mut self, id: RowId, units: i64) -> Result<()> {
        self.row_mut(id)?.units = units;
        Ok(())
    }

    pub fn set_grade_text(&mut self, id: RowId, text: &str) -> Result<()> {
        let grade = parse_grade(text)?;
        self.set_grade(id, grade)
    }

    pub fn set_units_text(&mut self, id: RowId, text: &str) -> Result<()> {
        let units = parse_units(text)?;
        self.set_units(id, units)
    }

    /// Computes over the rows in display order and writes the three results to the sink.
    pub fn calculate(&mut self) -> Result<ResultSet> {
        let rows = self.rows();
        let result = self.calculator.compute(&rows);

        if result.is_defined() {
            tracing::info!(
                total_units = result.total_units,
                average = result.rounded_average,
                standing = %result.standing,
                "calculated weighted average"
            );
        } else {
            tracing::warn!(rows = rows.len(), "no units to average over");
        }

        for field in OutputField::ALL {
            self.sink.write(field, &render_field(&result, field))?;
        }
        Ok(result)
    }

    pub fn rows(&self) -> Vec<Row> {
        self.entries.iter().map(|e| e.row.clone()).collect()
    }

    pub fn entries(&self) -> &[RowEntry] {
        &self.entries
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.row)
    }

    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    pub fn first_id(&self) -> RowId {
        self.entries[0].id
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub(crate) fn index_of(&self, id: RowId) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(GwaError::UnknownRow { id: id.0 })
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut Row> {
        let index = self.index_of(id)?;
        Ok(&mut self.entries[index].row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;

    #[test]
    fn test_starts_with_one_default_row() {
        let controller = RowController::new(MemorySink::default());
        assert_eq!(controller.row_count(), 1);
        assert_eq!(controller.rows(), vec![Row::default()]);
    }

    #[test]
    fn test_removal_is_one_shot() {
        let mut controller = RowController::new(MemorySink::default());
        let id = controller.add_row();
        assert!(controller.remove_row(id).is_ok());
        assert!(matches!(
            controller.remove_row(id),
            Err(GwaError::UnknownRow { id: 1 })
        ));
        assert_eq!(controller.row_count(), 1);
    }

    #[test]
    fn test_first_row_is_permanent() {
        let mut controller = RowController::new(MemorySink::default());
        let first = controller.first_id();
        assert!(matches!(
            controller.remove_row(first),
            Err(GwaError::PermanentRow { .. })
        ));
        assert_eq!(controller.row_count(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut controller = RowController::new(MemorySink::default());
        let a = controller.add_row();
        controller.clear();
        let b = controller.add_row();
        assert_ne!(a, b);
        assert!(controller.row(a).is_none());
    }

    #[test]
    fn test_rejects_unparseable_grade() {
        let mut controller = RowController::new(MemorySink::default());
        let first = controller.first_id();
        assert!(controller.set_grade_text(first, "one").is_err());
        assert_eq!(controller.rows()[0].grade, 1.75);
        controller.set_grade_text(first, " 1.5 ").unwrap();
        assert_eq!(controller.rows()[0].grade, 1.5);
    }

    #[test]
    fn test_load_rows() {
        let mut controller = RowController::new(MemorySink::default());
        controller.load_rows(vec![Row::new(1.0, 3), Row::new(1.5, 2)]);
        assert_eq!(controller.row_count(), 2);
        assert_eq!(controller.rows()[0], Row::new(1.0, 3));

        controller.load_rows(Vec::new());
        assert_eq!(controller.rows(), vec![Row::default()]);
    }
}
