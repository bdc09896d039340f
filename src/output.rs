//! Presentation of analysis reports.
//!
//! Supports a plain-text report, JSON serialization and a raw-row preview.

use anyhow::Result;
use std::fmt::{self, Display, Write as _};
use tracing::debug;

use crate::analyzers::types::{Distribution, Report, UserStats, ValueCount};
use crate::trip::{Demographics, TripDataset, TripRecord};

/// Number of raw rows shown per preview page.
pub const PAGE_SIZE: usize = 5;

const RULE: &str = "----------------------------------------";

/// Formats seconds like `1 day, 2:03:04`, with microseconds when not whole.
pub fn format_duration(seconds: f64) -> String {
    let micros = (seconds.max(0.0) * 1_000_000.0).round() as u64;
    let total = micros / 1_000_000;
    let fraction = micros % 1_000_000;

    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let secs = total % 60;

    let mut out = match days {
        0 => String::new(),
        1 => "1 day, ".to_string(),
        n => format!("{n} days, "),
    };
    let _ = write!(out, "{hours}:{minutes:02}:{secs:02}");
    if fraction > 0 {
        let _ = write!(out, ".{fraction:06}");
    }
    out
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &Report) {
    debug!("{:#?}", report);
}

/// Human-readable rendering of a [`Report`].
pub struct TextReport<'a>(pub &'a Report);

impl TextReport<'_> {
    fn context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = &self.0.filter;
        writeln!(f, "In {}:", spec.city)?;
        writeln!(
            f,
            "Given the filters 'day={}' and 'month={}':",
            spec.day_label(),
            spec.month_label()
        )
    }

    fn time(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = &self.0.time;
        writeln!(f, "\nCalculating The Most Frequent Times of Travel...\n")?;
        self.context(f)?;

        if let Some(months) = &time.months {
            write_distribution(f, "month", months, |m| m.to_string())?;
            write_table(f, "month", months)?;
        }
        if let Some(weekdays) = &time.weekdays {
            write_distribution(f, "day", weekdays, |d| d.to_string())?;
            write_table(f, "day", weekdays)?;
        }

        write_distribution(f, "start hour", &time.hours, |h| format!("{h}:00 - {h}:59"))?;
        write_table(f, "hour", &time.hours)?;
        writeln!(f, "{RULE}")
    }

    fn stations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stations = &self.0.stations;
        writeln!(f, "\nCalculating The Most Popular Stations and Trip...\n")?;
        self.context(f)?;

        write_most_common(f, "start station", stations.most_common_start_station.as_ref())?;
        write_most_common(f, "end station", stations.most_common_end_station.as_ref())?;
        match &stations.most_common_journey {
            Some(j) => writeln!(f, "The most common journey was {} to {}.", j.start, j.end)?,
            None => write_most_common::<String>(f, "journey", None)?,
        }
        writeln!(f, "{RULE}")
    }

    fn durations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let durations = &self.0.durations;
        writeln!(f, "\nCalculating Trip Duration...\n")?;
        self.context(f)?;

        writeln!(
            f,
            "The total travel time was {}",
            format_duration(durations.total_duration_seconds)
        )?;
        match durations.mean_duration_seconds {
            Some(mean) => writeln!(f, "The mean travel time was {}", format_duration(mean))?,
            None => writeln!(f, "The mean travel time is undefined: no trips matched.")?,
        }
        writeln!(f, "{RULE}")
    }

    fn users(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nCalculating User Stats...\n")?;
        self.context(f)?;

        let city = self.0.filter.city;
        write_counts(f, "User Type", self.0.users.user_types())?;

        match &self.0.users {
            UserStats::Basic { .. } => {
                writeln!(f, "Gender and birth year are not collected in {city}.")?;
            }
            UserStats::WithDemographics {
                genders,
                birth_years,
                ..
            } => {
                match genders {
                    Some(genders) if genders.is_empty() => {
                        writeln!(f, "No genders were recorded for these trips.")?
                    }
                    Some(genders) => write_counts(f, "Gender", genders)?,
                    None => writeln!(f, "Gender is not collected in {city}.")?,
                }
                match birth_years {
                    Some(years) => match (years.earliest, years.latest, years.most_common) {
                        (Some(earliest), Some(latest), Some(most_common)) => {
                            writeln!(f, "The earliest year of birth was {earliest}")?;
                            writeln!(f, "The most recent year of birth was {latest}")?;
                            writeln!(f, "The most common year of birth was {most_common}")?;
                        }
                        _ => writeln!(f, "No birth years were recorded for these trips.")?,
                    },
                    None => writeln!(f, "Birth year is not collected in {city}.")?,
                }
            }
        }
        writeln!(f, "{RULE}")
    }
}

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.time(f)?;
        self.stations(f)?;
        self.durations(f)?;
        self.users(f)
    }
}

fn write_most_common<T: Display>(
    f: &mut fmt::Formatter<'_>,
    what: &str,
    value: Option<&T>,
) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "The most common {what} was {v}."),
        None => writeln!(f, "The most common {what} could not be determined: no trips matched."),
    }
}

/// Writes the mode of `distribution` with its share of the matched trips.
fn write_distribution<K: PartialEq>(
    f: &mut fmt::Formatter<'_>,
    what: &str,
    distribution: &Distribution<K>,
    label: impl Fn(&K) -> String,
) -> fmt::Result {
    match &distribution.most_common {
        Some(value) => writeln!(
            f,
            "The most common {what} was {} ({} of {} trips).",
            label(value),
            distribution.count_of(value),
            distribution.total()
        ),
        None => write_most_common::<String>(f, what, None),
    }
}

fn write_table<K: Display>(
    f: &mut fmt::Formatter<'_>,
    what: &str,
    distribution: &Distribution<K>,
) -> fmt::Result {
    writeln!(
        f,
        "The number of bike rides for each {what}, in descending order, is given below:"
    )?;
    write_rows(f, &distribution.counts)
}

fn write_counts<K: Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    counts: &[ValueCount<K>],
) -> fmt::Result {
    writeln!(f, "{title}")?;
    write_rows(f, counts)
}

fn write_rows<K: Display>(f: &mut fmt::Formatter<'_>, counts: &[ValueCount<K>]) -> fmt::Result {
    let width = counts
        .iter()
        .map(|c| c.value.to_string().len())
        .max()
        .unwrap_or(0);
    for c in counts {
        writeln!(f, "{:<width$}    {}", c.value.to_string(), c.count)?;
    }
    Ok(())
}

/// Extra preview columns contributed by a rider payload.
pub trait RiderColumns {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl RiderColumns for () {
    fn headers() -> &'static [&'static str] {
        &[]
    }

    fn cells(&self) -> Vec<String> {
        Vec::new()
    }
}

impl RiderColumns for Demographics {
    fn headers() -> &'static [&'static str] {
        &["Gender", "Birth Year"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.gender.clone().unwrap_or_default(),
            self.birth_year.map(|y| y.to_string()).unwrap_or_default(),
        ]
    }
}

/// Renders `count` trips starting at `offset`, or `None` past the end.
pub fn preview(dataset: &TripDataset, offset: usize, count: usize) -> Option<String> {
    match dataset {
        TripDataset::WithDemographics { trips, .. } => preview_trips(trips, offset, count),
        TripDataset::WithoutDemographics(trips) => preview_trips(trips, offset, count),
    }
}

fn preview_trips<D: RiderColumns>(
    trips: &[TripRecord<D>],
    offset: usize,
    count: usize,
) -> Option<String> {
    if offset >= trips.len() {
        return None;
    }
    let page = trips[offset..].iter().take(count);

    let mut headers = vec![
        "#",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    headers.extend_from_slice(D::headers());
    headers.extend_from_slice(&["month", "day_of_week", "start hour"]);

    let mut out = headers.join(" | ");
    out.push('\n');
    for (i, trip) in page.enumerate() {
        let mut cells = vec![
            (offset + i).to_string(),
            trip.start_time.to_string(),
            trip.end_time.map(|t| t.to_string()).unwrap_or_default(),
            trip.trip_duration_seconds.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone(),
        ];
        cells.extend(trip.rider.cells());
        cells.extend([
            trip.month.to_string(),
            trip.weekday.to_string(),
            trip.start_hour.to_string(),
        ]);
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    Some(out)
}
