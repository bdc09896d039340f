use std::collections::{BTreeSet, HashMap};

use super::provider::{RawRow, RawTable, TripSource};
use crate::city::City;
use crate::error::AnalysisResult;

/// Serves pre-built tables; a city with nothing registered yields an empty one.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: HashMap<City, RawTable>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers rows; the header is every column name the rows use.
    pub fn with_rows(self, city: City, rows: Vec<RawRow>) -> Self {
        let columns = rows
            .iter()
            .flat_map(|row| row.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        self.with_table(city, RawTable { columns, rows })
    }

    pub fn with_table(mut self, city: City, table: RawTable) -> Self {
        self.tables.insert(city, table);
        self
    }
}

impl TripSource for InMemorySource {
    fn fetch_rows(&self, city: City) -> AnalysisResult<RawTable> {
        Ok(self.tables.get(&city).cloned().unwrap_or_default())
    }
}
