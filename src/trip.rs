//! Trip records and the city-dependent dataset shapes.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::calendar::{DayName, MonthName};

/// Rider demographics, only collected by some cities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demographics {
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// Which demographic columns a city's export carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemographicColumns {
    pub gender: bool,
    pub birth_year: bool,
}

impl DemographicColumns {
    pub fn any(&self) -> bool {
        self.gender || self.birth_year
    }
}

/// A single bike-share trip with its derived calendar fields.
///
/// `D` carries the city-specific rider payload: [`Demographics`] for cities
/// that collect it, `()` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord<D = ()> {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub trip_duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,

    // derived from start_time
    pub month: MonthName,
    pub weekday: DayName,
    pub start_hour: u32,

    pub rider: D,
}

/// Ordered (start, end) station pair identifying a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Journey {
    pub start: String,
    pub end: String,
}

impl<D> TripRecord<D> {
    /// Builds a record and derives month, weekday and start hour.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        trip_duration_seconds: f64,
        start_station: String,
        end_station: String,
        user_type: String,
        rider: D,
    ) -> Self {
        Self {
            month: MonthName::of(&start_time),
            weekday: DayName::of(&start_time),
            start_hour: start_time.hour(),
            start_time,
            end_time,
            trip_duration_seconds,
            start_station,
            end_station,
            user_type,
            rider,
        }
    }

    /// Replaces the rider payload, keeping every other field.
    pub fn with_rider<E>(self, rider: E) -> TripRecord<E> {
        TripRecord {
            start_time: self.start_time,
            end_time: self.end_time,
            trip_duration_seconds: self.trip_duration_seconds,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: self.user_type,
            month: self.month,
            weekday: self.weekday,
            start_hour: self.start_hour,
            rider,
        }
    }

    pub fn journey(&self) -> Journey {
        Journey {
            start: self.start_station.clone(),
            end: self.end_station.clone(),
        }
    }
}

/// All trips loaded for one city.
///
/// The variant is fixed by the city at load time, so datasets for cities
/// without demographic columns cannot produce demographic statistics.
/// `columns` records which demographic columns the export had, even when
/// there are no trips.
#[derive(Debug, Clone, PartialEq)]
pub enum TripDataset {
    WithDemographics {
        columns: DemographicColumns,
        trips: Vec<TripRecord<Demographics>>,
    },
    WithoutDemographics(Vec<TripRecord>),
}

impl TripDataset {
    pub fn len(&self) -> usize {
        match self {
            TripDataset::WithDemographics { trips, .. } => trips.len(),
            TripDataset::WithoutDemographics(trips) => trips.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_demographics(&self) -> bool {
        matches!(self, TripDataset::WithDemographics { .. })
    }
}
