//! Parser turning raw CSV rows into typed trip records.

use chrono::NaiveDateTime;

use crate::city::City;
use crate::error::{AnalysisError, AnalysisResult};
use crate::source::RawRow;
use crate::trip::{DemographicColumns, Demographics, TripRecord};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses an export timestamp such as `2017-06-23 15:09:32`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Decodes the columns every city shares.
///
/// `row_number` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedRow`] if the start time or trip duration
/// is missing or unparseable.
pub fn parse_trip(row: &RawRow, city: City, row_number: usize) -> AnalysisResult<TripRecord> {
    let malformed = |reason: String| AnalysisError::MalformedRow {
        city,
        row: row_number,
        reason,
    };

    let raw_start =
        optional(row, START_TIME).ok_or_else(|| malformed(format!("missing '{START_TIME}'")))?;
    let start_time = parse_timestamp(raw_start)
        .ok_or_else(|| malformed(format!("unparseable start time '{raw_start}'")))?;

    let end_time = optional(row, END_TIME).and_then(parse_timestamp);

    let raw_duration =
        optional(row, TRIP_DURATION).ok_or_else(|| malformed(format!("missing '{TRIP_DURATION}'")))?;
    let trip_duration_seconds = raw_duration
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| malformed(format!("invalid trip duration '{raw_duration}'")))?;

    Ok(TripRecord::new(
        start_time,
        end_time,
        trip_duration_seconds,
        text(row, START_STATION),
        text(row, END_STATION),
        text(row, USER_TYPE),
        (),
    ))
}

/// Decodes the `Gender` and `Birth Year` cells.
///
/// Blank cells are absent values. Birth years written as floats
/// (`1989.0`) are accepted; fractional or out-of-range years are not.
pub fn parse_demographics(row: &RawRow, city: City, row_number: usize) -> AnalysisResult<Demographics> {
    let gender = optional(row, GENDER).map(str::to_string);

    let birth_year = match optional(row, BIRTH_YEAR) {
        None => None,
        Some(raw) => {
            let year = raw
                .parse::<f64>()
                .ok()
                .filter(|y| {
                    y.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(y)
                })
                .ok_or_else(|| AnalysisError::MalformedRow {
                    city,
                    row: row_number,
                    reason: format!("invalid birth year '{raw}'"),
                })?;
            Some(year as i32)
        }
    };

    Ok(Demographics { gender, birth_year })
}

/// Reports which demographic columns an export header names.
pub fn demographic_columns(header: &[String]) -> DemographicColumns {
    let has = |name: &str| header.iter().any(|c| c.trim() == name);
    DemographicColumns {
        gender: has(GENDER),
        birth_year: has(BIRTH_YEAR),
    }
}

fn optional<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn text(row: &RawRow, column: &str) -> String {
    row.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DayName, MonthName};

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base_row() -> RawRow {
        row(&[
            (START_TIME, "2017-06-23 15:09:32"),
            (END_TIME, "2017-06-23 15:14:53"),
            (TRIP_DURATION, "321"),
            (START_STATION, "Wood St & Hubbard St"),
            (END_STATION, "Damen Ave & Chicago Ave"),
            (USER_TYPE, "Subscriber"),
        ])
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2017-01-01 00:07:57").is_some());
        assert!(parse_timestamp("2017-01-01 00:07:57.123").is_some());
        assert!(parse_timestamp("2017-01-01T00:07:57").is_some());
        assert!(parse_timestamp("01/01/2017").is_none());
    }

    #[test]
    fn test_parse_trip_valid_row() {
        let trip = parse_trip(&base_row(), City::Chicago, 1).unwrap();

        assert_eq!(trip.trip_duration_seconds, 321.0);
        assert_eq!(trip.start_station, "Wood St & Hubbard St");
        assert_eq!(trip.month, MonthName::June);
        assert_eq!(trip.weekday, DayName::Friday);
        assert_eq!(trip.start_hour, 15);
    }

    #[test]
    fn test_end_time_comes_from_end_time_column() {
        let trip = parse_trip(&base_row(), City::Chicago, 1).unwrap();
        let end = trip.end_time.unwrap();

        assert_ne!(end, trip.start_time);
        assert_eq!(end, parse_timestamp("2017-06-23 15:14:53").unwrap());
    }

    #[test]
    fn test_missing_end_time_is_none() {
        let mut r = base_row();
        r.remove(END_TIME);
        assert!(parse_trip(&r, City::Washington, 1).unwrap().end_time.is_none());
    }

    #[test]
    fn test_fractional_duration() {
        let mut r = base_row();
        r.insert(TRIP_DURATION.into(), "489.066".into());
        let trip = parse_trip(&r, City::Washington, 1).unwrap();
        assert!((trip.trip_duration_seconds - 489.066).abs() < 1e-9);
    }

    #[test]
    fn test_bad_start_time_is_malformed() {
        let mut r = base_row();
        r.insert(START_TIME.into(), "yesterday".into());

        let err = parse_trip(&r, City::Chicago, 7).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedRow { row: 7, .. }));
    }

    #[test]
    fn test_negative_duration_is_malformed() {
        let mut r = base_row();
        r.insert(TRIP_DURATION.into(), "-5".into());
        assert!(parse_trip(&r, City::Chicago, 1).is_err());
    }

    #[test]
    fn test_parse_demographics_blank_cells() {
        let r = row(&[(GENDER, ""), (BIRTH_YEAR, " ")]);
        let d = parse_demographics(&r, City::Chicago, 1).unwrap();
        assert_eq!(d, Demographics::default());
    }

    #[test]
    fn test_parse_demographics_float_year() {
        let r = row(&[(GENDER, "Female"), (BIRTH_YEAR, "1989.0")]);
        let d = parse_demographics(&r, City::NewYorkCity, 1).unwrap();
        assert_eq!(d.gender.as_deref(), Some("Female"));
        assert_eq!(d.birth_year, Some(1989));
    }

    #[test]
    fn test_parse_demographics_bad_year() {
        let r = row(&[(BIRTH_YEAR, "nineteen")]);
        assert!(parse_demographics(&r, City::Chicago, 1).is_err());
    }

    #[test]
    fn test_parse_demographics_year_out_of_range() {
        let r = row(&[(BIRTH_YEAR, "3000000000")]);
        let err = parse_demographics(&r, City::Chicago, 4).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedRow { row: 4, .. }));

        let r = row(&[(BIRTH_YEAR, "-1e12")]);
        assert!(parse_demographics(&r, City::Chicago, 1).is_err());
        let r = row(&[(BIRTH_YEAR, "inf")]);
        assert!(parse_demographics(&r, City::Chicago, 1).is_err());
    }

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_demographic_columns_from_header() {
        let both = demographic_columns(&header(&[START_TIME, GENDER, BIRTH_YEAR]));
        assert!(both.gender && both.birth_year);

        let gender_only = demographic_columns(&header(&[START_TIME, GENDER]));
        assert_eq!(
            gender_only,
            DemographicColumns {
                gender: true,
                birth_year: false,
            }
        );

        assert!(!demographic_columns(&header(&[START_TIME, USER_TYPE])).any());
        assert!(!demographic_columns(&[]).any());
    }
}
