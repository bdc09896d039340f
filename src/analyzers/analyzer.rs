use tracing::info;

use crate::analyzers::duration::duration_stats;
use crate::analyzers::station::station_stats;
use crate::analyzers::time::time_stats;
use crate::analyzers::types::Report;
use crate::analyzers::user::user_stats;
use crate::error::AnalysisResult;
use crate::filter::{FilterSpec, filter};
use crate::loader::load;
use crate::source::TripSource;
use crate::trip::TripDataset;

/// Computes all four statistic groups over an already filtered dataset.
pub fn analyze(dataset: &TripDataset, spec: &FilterSpec) -> Report {
    let (time, stations, durations) = match dataset {
        TripDataset::WithDemographics { trips, .. } => {
            (time_stats(trips, spec), station_stats(trips), duration_stats(trips))
        }
        TripDataset::WithoutDemographics(trips) => {
            (time_stats(trips, spec), station_stats(trips), duration_stats(trips))
        }
    };

    Report {
        filter: *spec,
        trips: dataset.len(),
        time,
        stations,
        durations,
        users: user_stats(dataset),
    }
}

/// Loads the city in `spec`, filters it and analyzes the result.
///
/// Load failures abort before any statistic is computed.
#[tracing::instrument(skip(source), fields(filter = %spec))]
pub fn run<S: TripSource + ?Sized>(source: &S, spec: &FilterSpec) -> AnalysisResult<Report> {
    let dataset = load(source, spec.city)?;
    let filtered = filter(&dataset, spec);
    if filtered.is_empty() {
        info!("No trips match the filter");
    }
    Ok(analyze(&filtered, spec))
}
