use crate::analyzers::types::{BirthYearStats, UserStats, ValueCount};
use crate::analyzers::utility::{mode, value_counts};
use crate::trip::{DemographicColumns, Demographics, TripDataset, TripRecord};

/// Rider breakdown for whichever shape the dataset has.
#[tracing::instrument(skip_all, fields(trips = dataset.len(), demographics = dataset.has_demographics()))]
pub fn user_stats(dataset: &TripDataset) -> UserStats {
    match dataset {
        TripDataset::WithDemographics { columns, trips } => demographic_user_stats(*columns, trips),
        TripDataset::WithoutDemographics(trips) => UserStats::Basic {
            user_types: user_type_counts(trips),
        },
    }
}

/// User types, genders and birth-year extremes. Blank cells are skipped and a
/// column missing from the export yields `None` for its statistic.
pub fn demographic_user_stats(
    columns: DemographicColumns,
    trips: &[TripRecord<Demographics>],
) -> UserStats {
    let genders = columns.gender.then(|| {
        value_counts(trips.iter().filter_map(|t| t.rider.gender.as_deref()))
            .into_iter()
            .map(|c| c.map(str::to_string))
            .collect()
    });

    let birth_years = columns.birth_year.then(|| {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.rider.birth_year).collect();
        BirthYearStats {
            earliest: years.iter().min().copied(),
            latest: years.iter().max().copied(),
            most_common: mode(years.iter().copied()),
        }
    });

    UserStats::WithDemographics {
        user_types: user_type_counts(trips),
        genders,
        birth_years,
    }
}

fn user_type_counts<D>(trips: &[TripRecord<D>]) -> Vec<ValueCount<String>> {
    value_counts(trips.iter().map(|t| t.user_type.as_str()))
        .into_iter()
        .map(|c| c.map(str::to_string))
        .collect()
}
