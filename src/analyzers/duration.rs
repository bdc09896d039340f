use crate::analyzers::types::DurationStats;
use crate::analyzers::utility::mean;
use crate::trip::TripRecord;

/// Total and mean trip duration in seconds.
#[tracing::instrument(skip_all, fields(trips = trips.len()))]
pub fn duration_stats<D>(trips: &[TripRecord<D>]) -> DurationStats {
    let durations: Vec<f64> = trips.iter().map(|t| t.trip_duration_seconds).collect();

    DurationStats {
        trip_count: durations.len(),
        total_duration_seconds: durations.iter().sum(),
        mean_duration_seconds: mean(&durations),
    }
}
