//! CSV persistence for chart tables.
//!
//! Each write replaces the destination file; nothing is appended across runs.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::pipeline::{Cell, Table};

/// Writes `table` to `path` with a header row, truncating any existing file.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    debug!(path = %path.display(), columns = table.header.len(), "Writing CSV table");

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(Cell::to_string))?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = table.rows.len(), "Table written");
    Ok(())
}

/// Reads a table previously written by [`write_table`].
///
/// Cells are typed by [`Cell::parse`]: a field becomes a number only when it
/// is the exact form `write_table` would print, otherwise it stays text.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let header = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::parse).collect());
    }

    Ok(Table { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn sample() -> Table {
        Table {
            header: vec![
                "year".to_string(),
                "driverId".to_string(),
                "Driver Name".to_string(),
                "Total Points".to_string(),
                "Races Won".to_string(),
            ],
            rows: vec![
                vec![
                    Cell::Int(2020),
                    Cell::Int(1),
                    Cell::Text("Lewis Hamilton".to_string()),
                    Cell::Float(347.0),
                    Cell::Int(11),
                ],
                vec![
                    Cell::Int(2020),
                    Cell::Int(9),
                    Cell::Null,
                    Cell::Float(4.5),
                    Cell::Int(0),
                ],
            ],
        }
    }

    #[test]
    fn test_write_then_read_keeps_schema_and_values() {
        let path = temp_path("f1_metrics_test_roundtrip.csv");
        let _ = fs::remove_file(&path);

        let table = sample();
        write_table(&path, &table).unwrap();
        let read = read_table(&path).unwrap();

        assert_eq!(read, table);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_table_formats_cells() {
        let path = temp_path("f1_metrics_test_format.csv");
        let _ = fs::remove_file(&path);

        write_table(&path, &sample()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines[0], "year,driverId,Driver Name,Total Points,Races Won");
        assert_eq!(lines[1], "2020,1,Lewis Hamilton,347.0,11");
        assert_eq!(lines[2], "2020,9,,4.5,0");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_table_replaces_previous_output() {
        let path = temp_path("f1_metrics_test_replace.csv");
        let _ = fs::remove_file(&path);

        write_table(&path, &sample()).unwrap();
        write_table(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let path = temp_path("f1_metrics_test_quote.csv");
        let _ = fs::remove_file(&path);

        let table = Table {
            header: vec!["Constructor Name".to_string()],
            rows: vec![vec![Cell::Text("Brabham, Repco".to_string())]],
        };
        write_table(&path, &table).unwrap();

        assert_eq!(read_table(&path).unwrap(), table);

        fs::remove_file(&path).unwrap();
    }
}
