//! Result types produced by the statistic groups.
//!
//! A `None` "most common" value or mean means no trips matched; it never
//! stands in for a real value.

use serde::Serialize;

use crate::calendar::{DayName, MonthName};
use crate::filter::FilterSpec;
use crate::trip::Journey;

/// Number of trips sharing one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount<K> {
    pub value: K,
    pub count: usize,
}

impl<K> ValueCount<K> {
    pub fn map<U>(self, f: impl FnOnce(K) -> U) -> ValueCount<U> {
        ValueCount {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Frequency table sorted by descending count, ties in natural order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution<K> {
    pub most_common: Option<K>,
    pub counts: Vec<ValueCount<K>>,
}

impl<K: PartialEq> Distribution<K> {
    pub fn count_of(&self, value: &K) -> usize {
        self.counts
            .iter()
            .find(|c| &c.value == value)
            .map_or(0, |c| c.count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// Popular travel times. A dimension pinned by the filter is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub hours: Distribution<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<Distribution<MonthName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Distribution<DayName>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    pub most_common_journey: Option<Journey>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_duration_seconds: f64,
    pub mean_duration_seconds: Option<f64>,
}

/// Birth-year extremes; all `None` when no matched trip has a birth year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub latest: Option<i32>,
    pub most_common: Option<i32>,
}

/// Rider breakdown. Datasets without demographic columns only produce
/// [`UserStats::Basic`].
///
/// Inside `WithDemographics` a `None` field means the export lacks that
/// column, while an empty table or empty [`BirthYearStats`] means the column
/// exists but no matched trip filled it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserStats {
    Basic {
        user_types: Vec<ValueCount<String>>,
    },
    WithDemographics {
        user_types: Vec<ValueCount<String>>,
        genders: Option<Vec<ValueCount<String>>>,
        birth_years: Option<BirthYearStats>,
    },
}

impl UserStats {
    pub fn user_types(&self) -> &[ValueCount<String>] {
        match self {
            UserStats::Basic { user_types } => user_types,
            UserStats::WithDemographics { user_types, .. } => user_types,
        }
    }
}

/// Everything computed for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub filter: FilterSpec,
    pub trips: usize,
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}
