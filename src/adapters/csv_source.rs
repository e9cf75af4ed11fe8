use crate::domain::model::Row;
use crate::domain::ports::RowSource;
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

/// Reads rows from CSV with a `sub_code,grade,units` header.
pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvRowSource<std::fs::File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        Ok(Self { reader })
    }
}

impl<R: Read> CsvRowSource<R> {
    pub fn from_reader(input: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);
        Self { reader }
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn read_rows(&mut self) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        for record in self.reader.deserialize() {
            let row: Row = record?;
            rows.push(row);
        }
        tracing::debug!(rows = rows.len(), "read rows from csv");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows() {
        let data = "sub_code,grade,units\nMATH 21,1.0,3\n,1.75,3\n";
        let rows = CsvRowSource::from_reader(data.as_bytes()).read_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject_code, "MATH 21");
        assert_eq!(rows[1], Row::new(1.75, 3));
    }

    #[test]
    fn test_rejects_bad_units() {
        let data = "sub_code,grade,units\nCS 11,1.0,three\n";
        assert!(CsvRowSource::from_reader(data.as_bytes()).read_rows().is_err());
    }
}
