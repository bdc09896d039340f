//! Loads a city's trip export into a [`TripDataset`].

use tracing::{debug, info, warn};

use crate::city::City;
use crate::error::AnalysisResult;
use crate::parser::{demographic_columns, parse_demographics, parse_trip};
use crate::source::TripSource;
use crate::trip::TripDataset;

/// Reads every row for `city` and derives the calendar fields.
///
/// The dataset shape follows the city: cities that collect demographics get
/// [`TripDataset::WithDemographics`] as long as the export header names a
/// `Gender` or `Birth Year` column, even when there are no rows. Washington
/// always gets [`TripDataset::WithoutDemographics`].
///
/// # Errors
///
/// Fails with `DataSourceUnavailable` when the backing data cannot be read
/// and with `MalformedRow` on the first row the parser rejects. No partial
/// dataset is returned.
#[tracing::instrument(skip(source))]
pub fn load<S: TripSource + ?Sized>(source: &S, city: City) -> AnalysisResult<TripDataset> {
    let table = source.fetch_rows(city)?;
    let rows = table.rows;
    debug!(columns = table.columns.len(), rows = rows.len(), "Raw rows fetched");

    let columns = demographic_columns(&table.columns);
    let with_demographics = city.has_demographics() && columns.any();
    if city.has_demographics() && !with_demographics {
        warn!(%city, "Export has no demographic columns, user stats will be limited");
    }

    let dataset = if with_demographics {
        let trips = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let trip = parse_trip(row, city, i + 1)?;
                let rider = parse_demographics(row, city, i + 1)?;
                Ok(trip.with_rider(rider))
            })
            .collect::<AnalysisResult<Vec<_>>>()?;
        TripDataset::WithDemographics { columns, trips }
    } else {
        let trips = rows
            .iter()
            .enumerate()
            .map(|(i, row)| parse_trip(row, city, i + 1))
            .collect::<AnalysisResult<Vec<_>>>()?;
        TripDataset::WithoutDemographics(trips)
    };

    info!(
        %city,
        trips = dataset.len(),
        demographics = dataset.has_demographics(),
        "Trip dataset loaded"
    );
    Ok(dataset)
}
