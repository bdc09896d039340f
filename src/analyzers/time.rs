use crate::analyzers::types::TimeStats;
use crate::analyzers::utility::distribution;
use crate::filter::FilterSpec;
use crate::trip::TripRecord;

/// Most frequent start hour, plus month and weekday distributions for the
/// dimensions the filter leaves open.
#[tracing::instrument(skip_all, fields(trips = trips.len(), month = %spec.month_label(), day = %spec.day_label()))]
pub fn time_stats<D>(trips: &[TripRecord<D>], spec: &FilterSpec) -> TimeStats {
    TimeStats {
        hours: distribution(trips.iter().map(|t| t.start_hour)),
        months: spec
            .month
            .is_none()
            .then(|| distribution(trips.iter().map(|t| t.month))),
        weekdays: spec
            .day
            .is_none()
            .then(|| distribution(trips.iter().map(|t| t.weekday))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DayName, MonthName};
    use crate::city::City;
    use chrono::NaiveDate;

    fn trip(month: u32, day: u32, hour: u32) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap();
        TripRecord::new(start, None, 60.0, "A".into(), "B".into(), "Customer".into(), ())
    }

    #[test]
    fn test_hours_and_weekdays_example() {
        // Mondays 2 Jan at 8h twice, Tuesday 3 Jan at 17h
        let trips = vec![trip(1, 2, 8), trip(1, 2, 8), trip(1, 3, 17)];
        let stats = time_stats(&trips, &FilterSpec::new(City::Chicago));

        assert_eq!(stats.hours.most_common, Some(8));
        assert_eq!(stats.hours.count_of(&8), 2);
        assert_eq!(stats.hours.count_of(&17), 1);
        assert_eq!(stats.hours.counts.len(), 2);

        let weekdays = stats.weekdays.unwrap();
        assert_eq!(weekdays.most_common, Some(DayName::Monday));

        let months = stats.months.unwrap();
        assert_eq!(months.most_common, Some(MonthName::January));
        assert_eq!(months.total(), 3);
    }

    #[test]
    fn test_pinned_dimensions_are_suppressed() {
        let trips = vec![trip(1, 2, 8)];
        let spec = FilterSpec::new(City::Chicago)
            .with_month(Some(MonthName::January))
            .with_day(Some(DayName::Monday));

        let stats = time_stats(&trips, &spec);
        assert!(stats.months.is_none());
        assert!(stats.weekdays.is_none());
        assert_eq!(stats.hours.most_common, Some(8));
    }

    #[test]
    fn test_ties_use_calendar_order() {
        // one June Sunday, one January Wednesday
        let trips = vec![trip(6, 4, 12), trip(1, 4, 12)];
        let stats = time_stats(&trips, &FilterSpec::new(City::Washington));

        assert_eq!(stats.months.unwrap().most_common, Some(MonthName::January));
        assert_eq!(stats.weekdays.unwrap().most_common, Some(DayName::Wednesday));
    }

    #[test]
    fn test_hour_counts_tie_ascending() {
        let trips = vec![trip(1, 2, 17), trip(1, 2, 9), trip(1, 2, 23)];
        let stats = time_stats(&trips, &FilterSpec::new(City::Chicago));
        let hours: Vec<u32> = stats.hours.counts.iter().map(|c| c.value).collect();
        assert_eq!(hours, vec![9, 17, 23]);
    }

    #[test]
    fn test_empty_trips() {
        let stats = time_stats::<()>(&[], &FilterSpec::new(City::Chicago));
        assert_eq!(stats.hours.most_common, None);
        assert_eq!(stats.weekdays.unwrap().most_common, None);
    }
}
