use std::collections::HashMap;

use crate::city::City;
use crate::error::AnalysisResult;

/// One raw row: column name to cell text.
pub type RawRow = HashMap<String, String>;

/// A city's export: its header and its rows in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Supplies the raw rows of a city's trip export.
pub trait TripSource {
    fn fetch_rows(&self, city: City) -> AnalysisResult<RawTable>;
}
