use std::path::{Path, PathBuf};
use tracing::debug;

use super::provider::{RawRow, RawTable, TripSource};
use crate::city::City;
use crate::error::{AnalysisError, AnalysisResult};

/// Reads `<dir>/<city file>` exports such as `chicago.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.dir.join(city.file_name())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TripSource for CsvDirSource {
    #[tracing::instrument(skip_all, fields(city = %city))]
    fn fetch_rows(&self, city: City) -> AnalysisResult<RawTable> {
        let path = self.path_for(city);
        debug!(path = %path.display(), "Opening trip export");
        let mut rdr = csv::Reader::from_path(&path)
            .map_err(|source| AnalysisError::DataSourceUnavailable { city, source })?;

        let read_error = |e: csv::Error, row: usize| {
            if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                AnalysisError::DataSourceUnavailable { city, source: e }
            } else {
                AnalysisError::MalformedRow {
                    city,
                    row,
                    reason: e.to_string(),
                }
            }
        };

        let columns: Vec<String> = rdr
            .headers()
            .map_err(|e| read_error(e, 0))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, result) in rdr.deserialize().enumerate() {
            let row: RawRow = result.map_err(|e| read_error(e, index + 1))?;
            rows.push(row);
        }

        debug!(columns = columns.len(), rows = rows.len(), "CSV rows read");
        Ok(RawTable { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDirSource::new(dir.path());

        let err = source.fetch_rows(City::Chicago).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DataSourceUnavailable { city: City::Chicago, .. }
        ));
    }

    #[test]
    fn test_reads_rows_keyed_by_header() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("washington.csv"),
            ",Start Time,User Type\n0,2017-06-21 08:00:00,Subscriber\n1,2017-06-21 09:00:00,Customer\n",
        )
        .unwrap();

        let table = CsvDirSource::new(dir.path())
            .fetch_rows(City::Washington)
            .unwrap();

        assert_eq!(table.columns, vec!["", "Start Time", "User Type"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["Start Time"], "2017-06-21 08:00:00");
        assert_eq!(table.rows[1]["User Type"], "Customer");
    }

    #[test]
    fn test_header_only_export_keeps_columns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("chicago.csv"),
            "Start Time,User Type,Gender,Birth Year
",
        )
        .unwrap();

        let table = CsvDirSource::new(dir.path())
            .fetch_rows(City::Chicago)
            .unwrap();

        assert!(table.rows.is_empty());
        assert_eq!(table.columns, vec!["Start Time", "User Type", "Gender", "Birth Year"]);
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("chicago.csv"),
            "Start Time,User Type\n2017-06-21 08:00:00,Subscriber\n2017-06-21 09:00:00\n",
        )
        .unwrap();

        let err = CsvDirSource::new(dir.path())
            .fetch_rows(City::Chicago)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedRow { row: 2, .. }));
    }
}
