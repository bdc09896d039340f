//! The fixed set of cities with trip data.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Human-readable name, e.g. `New York City`.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's trip export inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the city's export carries the `Gender` and `Birth Year` columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }

    /// Resolves loose user input by its first letter (`c`, `n`, `w`).
    pub fn from_abbreviation(input: &str) -> Result<Self, AnalysisError> {
        let trimmed = input.trim();
        match trimmed.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('c') => Ok(City::Chicago),
            Some('n') => Ok(City::NewYorkCity),
            Some('w') => Ok(City::Washington),
            _ => Err(AnalysisError::UnknownCity(trimmed.to_string())),
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the exact identifiers `chicago`, `new york city` (also
/// `new_york_city`, `new-york-city`) and `washington`, ignoring case.
impl FromStr for City {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(AnalysisError::UnknownCity(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_identifiers() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("new york city".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("new_york_city".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!(" WASHINGTON ".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_from_str_rejects_unknown_city() {
        let err = "boston".parse::<City>().unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownCity(ref c) if c == "boston"));
    }

    #[test]
    fn test_from_abbreviation_uses_first_letter() {
        assert_eq!(City::from_abbreviation("c").unwrap(), City::Chicago);
        assert_eq!(City::from_abbreviation("NY").unwrap(), City::NewYorkCity);
        assert_eq!(City::from_abbreviation("wash").unwrap(), City::Washington);
        assert!(City::from_abbreviation("").is_err());
        assert!(City::from_abbreviation("boston").is_err());
    }

    #[test]
    fn test_only_washington_lacks_demographics() {
        assert!(City::Chicago.has_demographics());
        assert!(City::NewYorkCity.has_demographics());
        assert!(!City::Washington.has_demographics());
    }
}
