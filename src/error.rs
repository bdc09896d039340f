//! Error types shared by the loader and the analysis engine.

use crate::city::City;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    /// The identifier does not name one of the supported cities.
    #[error("unknown city '{0}'")]
    UnknownCity(String),

    /// A month or weekday filter value could not be interpreted.
    #[error("invalid filter value '{0}'")]
    InvalidFilter(String),

    /// The city's backing file is missing or unreadable.
    #[error("trip data for {city} is unavailable: {source}")]
    DataSourceUnavailable {
        city: City,
        #[source]
        source: csv::Error,
    },

    /// A row violates the guarantees the loader relies on.
    #[error("malformed row {row} in {city} data: {reason}")]
    MalformedRow {
        city: City,
        row: usize,
        reason: String,
    },
}
