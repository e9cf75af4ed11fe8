use crate::domain::model::{FieldBindings, OutputField};
use crate::domain::ports::ResultSink;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::io::Write;

/// Keeps the latest value written to each field.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    values: BTreeMap<&'static str, String>,
    writes: usize,
}

impl MemorySink {
    pub fn get(&self, field: OutputField) -> Option<&str> {
        self.values.get(field.attribute_name()).map(String::as_str)
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ResultSink for MemorySink {
    fn write(&mut self, field: OutputField, value: &str) -> Result<()> {
        self.values.insert(field.attribute_name(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// A set of named host fields, written through [`FieldBindings`].
///
/// Outputs bound to an empty name have no destination and are dropped.
#[derive(Debug, Clone, Default)]
pub struct DocumentSink {
    bindings: FieldBindings,
    fields: BTreeMap<String, String>,
}

impl DocumentSink {
    pub fn new(bindings: FieldBindings) -> Self {
        Self {
            bindings,
            fields: BTreeMap::new(),
        }
    }

    pub fn bindings(&self) -> &FieldBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut FieldBindings {
        &mut self.bindings
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl ResultSink for DocumentSink {
    fn write(&mut self, field: OutputField, value: &str) -> Result<()> {
        let name = self.bindings.field_name(field);
        if name.is_empty() {
            tracing::debug!(attribute = field.attribute_name(), "output is unbound");
            return Ok(());
        }
        self.fields.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// Prints one labelled line per field.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn write(&mut self, field: OutputField, value: &str) -> Result<()> {
        let label = match field {
            OutputField::TotalWeight => "Total units",
            OutputField::WeightedAverage => "Weighted average",
            OutputField::Class => "Standing",
        };
        writeln!(self.out, "{:<17}{}", format!("{}:", label), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_sink_uses_bindings() {
        let mut bindings = FieldBindings::default();
        bindings.set_attribute("weighted-average-result", "result-gwa");
        bindings.set_attribute("class-result", "");
        let mut sink = DocumentSink::new(bindings);

        sink.write(OutputField::WeightedAverage, "1.000000 (rounded as 1)").unwrap();
        sink.write(OutputField::Class, "---").unwrap();

        assert_eq!(sink.field("result-gwa"), Some("1.000000 (rounded as 1)"));
        assert_eq!(sink.fields().len(), 1);
    }

    #[test]
    fn test_console_sink_lines() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.write(OutputField::TotalWeight, "6").unwrap();
        sink.write(OutputField::Class, "---").unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Total units:     6\nStanding:        ---\n");
    }
}
