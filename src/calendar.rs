//! Month and weekday names used for filtering and grouping.
//!
//! Variants are declared in calendar order (January first, Monday first), so
//! the derived `Ord` is the natural ordering used for tie-breaks.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl MonthName {
    pub const ALL: [MonthName; 12] = [
        MonthName::January,
        MonthName::February,
        MonthName::March,
        MonthName::April,
        MonthName::May,
        MonthName::June,
        MonthName::July,
        MonthName::August,
        MonthName::September,
        MonthName::October,
        MonthName::November,
        MonthName::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MonthName::January => "January",
            MonthName::February => "February",
            MonthName::March => "March",
            MonthName::April => "April",
            MonthName::May => "May",
            MonthName::June => "June",
            MonthName::July => "July",
            MonthName::August => "August",
            MonthName::September => "September",
            MonthName::October => "October",
            MonthName::November => "November",
            MonthName::December => "December",
        }
    }

    pub fn of(timestamp: &NaiveDateTime) -> Self {
        // month0() is always within 0..12
        Self::ALL[timestamp.month0() as usize]
    }

    /// Resolves loose input by its first three letters (`jan`, `Febr`, ...).
    pub fn from_abbreviation(input: &str) -> Result<Self, AnalysisError> {
        let key: String = input.trim().to_lowercase().chars().take(3).collect();
        Self::ALL
            .into_iter()
            .find(|m| key.len() == 3 && m.name().to_lowercase().starts_with(&key))
            .ok_or_else(|| AnalysisError::InvalidFilter(input.trim().to_string()))
    }
}

impl DayName {
    pub const ALL: [DayName; 7] = [
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
        DayName::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DayName::Monday => "Monday",
            DayName::Tuesday => "Tuesday",
            DayName::Wednesday => "Wednesday",
            DayName::Thursday => "Thursday",
            DayName::Friday => "Friday",
            DayName::Saturday => "Saturday",
            DayName::Sunday => "Sunday",
        }
    }

    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self::from(timestamp.weekday())
    }

    /// Resolves loose input: a digit `0` (Monday) to `6` (Sunday), the first
    /// two letters for days sharing an initial (`tu`, `th`, `sa`, `su`), or the
    /// first letter otherwise (`m`, `w`, `f`).
    pub fn from_abbreviation(input: &str) -> Result<Self, AnalysisError> {
        let trimmed = input.trim();
        let key: String = trimmed.to_lowercase().chars().take(2).collect();
        let invalid = || AnalysisError::InvalidFilter(trimmed.to_string());

        let first = key.chars().next().ok_or_else(invalid)?;
        if let Some(digit) = first.to_digit(10) {
            return Self::ALL.get(digit as usize).copied().ok_or_else(invalid);
        }

        let prefix = match first {
            't' | 's' if key.chars().count() < 2 => return Err(invalid()),
            't' | 's' => key,
            _ => first.to_string(),
        };

        Self::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase().starts_with(&prefix))
            .ok_or_else(invalid)
    }
}

impl From<Weekday> for DayName {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for MonthName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full month name only, ignoring case.
impl FromStr for MonthName {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalysisError::InvalidFilter(wanted.to_string()))
    }
}

/// Full weekday name only, ignoring case.
impl FromStr for DayName {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalysisError::InvalidFilter(wanted.to_string()))
    }
}
