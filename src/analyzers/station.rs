use crate::analyzers::types::StationStats;
use crate::analyzers::utility::mode;
use crate::trip::TripRecord;

/// Most popular start station, end station and journey.
///
/// Journeys are directed: A to B and B to A count separately.
#[tracing::instrument(skip_all, fields(trips = trips.len()))]
pub fn station_stats<D>(trips: &[TripRecord<D>]) -> StationStats {
    StationStats {
        most_common_start_station: mode(trips.iter().map(|t| t.start_station.as_str()))
            .map(str::to_string),
        most_common_end_station: mode(trips.iter().map(|t| t.end_station.as_str()))
            .map(str::to_string),
        most_common_journey: mode(trips.iter().map(TripRecord::journey)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Journey;
    use chrono::NaiveDate;

    fn trip(start: &str, end: &str) -> TripRecord {
        let ts = NaiveDate::from_ymd_opt(2017, 5, 1)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        TripRecord::new(ts, None, 300.0, start.into(), end.into(), "Subscriber".into(), ())
    }

    #[test]
    fn test_most_common_stations_and_journey() {
        let trips = vec![
            trip("Canal St", "Clark St"),
            trip("Canal St", "Clark St"),
            trip("Lake Shore Dr", "Canal St"),
        ];

        let stats = station_stats(&trips);
        assert_eq!(stats.most_common_start_station.as_deref(), Some("Canal St"));
        assert_eq!(stats.most_common_end_station.as_deref(), Some("Clark St"));
        assert_eq!(
            stats.most_common_journey,
            Some(Journey {
                start: "Canal St".into(),
                end: "Clark St".into()
            })
        );
    }

    #[test]
    fn test_reverse_journeys_are_distinct() {
        let trips = vec![trip("A", "B"), trip("B", "A"), trip("C", "D"), trip("C", "D")];

        // Merged, A<->B would have 2 and win the tie alphabetically; kept apart, C->D wins.
        let journey = station_stats(&trips).most_common_journey.unwrap();
        assert_eq!((journey.start.as_str(), journey.end.as_str()), ("C", "D"));
    }

    #[test]
    fn test_empty_set_has_no_data() {
        let stats = station_stats::<()>(&[]);
        assert_eq!(stats.most_common_start_station, None);
        assert_eq!(stats.most_common_end_station, None);
        assert_eq!(stats.most_common_journey, None);
    }

    #[test]
    fn test_tie_break_alphabetical() {
        let trips = vec![trip("Wood St", "X"), trip("Ashland Ave", "Y")];
        let stats = station_stats(&trips);
        assert_eq!(stats.most_common_start_station.as_deref(), Some("Ashland Ave"));
        assert_eq!(stats.most_common_end_station.as_deref(), Some("X"));
    }

    #[test]
    fn test_result_ignores_trip_order() {
        // every station and journey ties at least once
        let trips = vec![
            trip("Wood St", "Canal St"),
            trip("Ashland Ave", "Clark St"),
            trip("Clark St", "Ashland Ave"),
            trip("Wood St", "Clark St"),
            trip("Ashland Ave", "Canal St"),
            trip("Clark St", "Ashland Ave"),
            trip("Ashland Ave", "Clark St"),
        ];
        let expected = station_stats(&trips);

        let mut reversed = trips.clone();
        reversed.reverse();
        assert_eq!(station_stats(&reversed), expected);

        for shift in 1..trips.len() {
            let mut rotated = trips.clone();
            rotated.rotate_left(shift);
            assert_eq!(station_stats(&rotated), expected);
        }
    }
}
