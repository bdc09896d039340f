//! Month and weekday filtering of a loaded dataset.

use serde::Serialize;
use std::fmt;

use crate::calendar::{DayName, MonthName};
use crate::city::City;
use crate::error::AnalysisResult;
use crate::trip::{TripDataset, TripRecord};

/// Which trips to analyze. `None` means no restriction on that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub city: City,
    pub month: Option<MonthName>,
    pub day: Option<DayName>,
}

impl FilterSpec {
    pub fn new(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn with_month(mut self, month: Option<MonthName>) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: Option<DayName>) -> Self {
        self.day = day;
        self
    }

    pub fn matches<D>(&self, trip: &TripRecord<D>) -> bool {
        self.month.is_none_or(|m| trip.month == m) && self.day.is_none_or(|d| trip.weekday == d)
    }

    /// Lower-case label for one dimension: the value's name or `all`.
    pub fn month_label(&self) -> String {
        label(self.month)
    }

    pub fn day_label(&self) -> String {
        label(self.day)
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={}",
            self.city,
            self.month_label(),
            self.day_label()
        )
    }
}

fn label<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "all".to_string(), |v| v.to_string().to_lowercase())
}

/// Parses a full month name, or `all` for no month filter.
pub fn parse_month_filter(value: &str) -> AnalysisResult<Option<MonthName>> {
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Parses a full weekday name, or `all` for no day filter.
pub fn parse_day_filter(value: &str) -> AnalysisResult<Option<DayName>> {
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Returns a new dataset holding only the trips `spec` selects.
///
/// The input is left untouched and an empty result is valid.
#[tracing::instrument(skip(dataset), fields(input = dataset.len()))]
pub fn filter(dataset: &TripDataset, spec: &FilterSpec) -> TripDataset {
    let filtered = match dataset {
        TripDataset::WithDemographics { columns, trips } => TripDataset::WithDemographics {
            columns: *columns,
            trips: filter_trips(trips, spec),
        },
        TripDataset::WithoutDemographics(trips) => {
            TripDataset::WithoutDemographics(filter_trips(trips, spec))
        }
    };

    tracing::debug!(kept = filtered.len(), "Filter applied");
    filtered
}

pub fn filter_trips<D: Clone>(trips: &[TripRecord<D>], spec: &FilterSpec) -> Vec<TripRecord<D>> {
    trips.iter().filter(|t| spec.matches(t)).cloned().collect()
}
