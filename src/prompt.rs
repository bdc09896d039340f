//! Interactive exploration over any line-based input and output.
//!
//! Answers are resolved loosely (first letters, weekday digits). Blank or
//! unrecognised answers re-prompt; end of input ends the session.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::analyzers::analyzer::analyze;
use crate::calendar::{DayName, MonthName};
use crate::city::City;
use crate::filter::{FilterSpec, filter};
use crate::loader::load;
use crate::output::{PAGE_SIZE, TextReport, preview};
use crate::source::TripSource;
use crate::trip::TripDataset;

const BLANK: &str = "It appears you did not give an answer! Please try again.\n";
const UNKNOWN: &str = "Sorry, the program could not interpret your answer! Please try again.\n";

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `question` and reads one trimmed line. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-asks until `resolve` accepts a non-blank answer.
    fn ask_until<T>(
        &mut self,
        question: &str,
        mut resolve: impl FnMut(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                writeln!(self.output, "{BLANK}")?;
                continue;
            }
            match resolve(&answer) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{UNKNOWN}")?,
            }
        }
    }

    pub fn city(&mut self) -> Result<Option<City>> {
        let city = self.ask_until(
            "Would you like to explore data from Chicago, New York, or Washington?",
            |a| City::from_abbreviation(a).ok(),
        )?;
        if let Some(city) = city {
            writeln!(self.output, "You will now be shown data from {city}.\n")?;
        }
        Ok(city)
    }

    pub fn day(&mut self) -> Result<Option<DayName>> {
        let day = self.ask_until(
            "Which day of the week?\n\
             You can input either the name of the day (e.g. 'Monday', 'Mon', or 'M')\n\
             or give an integer (Mon = 0, ..., Sun = 6)",
            |a| DayName::from_abbreviation(a).ok(),
        )?;
        if let Some(day) = day {
            writeln!(self.output, "You will now be shown data from {day}.\n")?;
        }
        Ok(day)
    }

    pub fn month(&mut self) -> Result<Option<MonthName>> {
        let month = self.ask_until(
            "Which month of the year?\nJanuary, February, March, April, May, or June?",
            |a| MonthName::from_abbreviation(a).ok(),
        )?;
        if let Some(month) = month {
            writeln!(self.output, "You will now be shown data from {month}.\n")?;
        }
        Ok(month)
    }

    /// Asks for a city and which filters to apply.
    pub fn filter_spec(&mut self) -> Result<Option<FilterSpec>> {
        let Some(city) = self.city()? else {
            return Ok(None);
        };

        let Some(kind) = self.ask_until(
            "Would you like to filter the data by day, month, both, or not at all?\n\
             Please give one of the following answers: 'day', 'month', 'both', or 'none'.",
            |a| {
                let a = a.to_lowercase();
                ["day", "month", "both", "none"]
                    .into_iter()
                    .find(|k| *k == a)
            },
        )?
        else {
            return Ok(None);
        };

        let mut spec = FilterSpec::new(city);
        if matches!(kind, "day" | "both") {
            let Some(day) = self.day()? else {
                return Ok(None);
            };
            spec.day = Some(day);
        }
        if matches!(kind, "month" | "both") {
            let Some(month) = self.month()? else {
                return Ok(None);
            };
            spec.month = Some(month);
        }
        writeln!(self.output, "{}", "-".repeat(40))?;
        Ok(Some(spec))
    }

    /// Yes/no question; only the first letter counts.
    pub fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        self.ask_until(question, |a| match a.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => Some(true),
            Some('n') => Some(false),
            _ => None,
        })
    }

    /// Shows raw trips a page at a time for as long as the user asks.
    pub fn page_rows(&mut self, dataset: &TripDataset) -> Result<()> {
        let mut offset = 0;
        loop {
            let more = self.confirm(&format!(
                "Would you like to see {PAGE_SIZE} lines of the data set?\nPlease answer 'yes' or 'no'."
            ))?;
            if more != Some(true) {
                return Ok(());
            }
            match preview(dataset, offset, PAGE_SIZE) {
                Some(page) => writeln!(self.output, "{page}")?,
                None => {
                    writeln!(self.output, "There are no more rows to show.\n")?;
                    return Ok(());
                }
            }
            offset += PAGE_SIZE;
        }
    }
}

/// Runs the prompt loop until the user declines to restart or input ends.
///
/// A load failure ends the session with an error.
pub fn explore<S, R, W>(source: &S, input: R, output: W) -> Result<W>
where
    S: TripSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut prompt = Prompt::new(input, output);
    writeln!(prompt.output, "Hello! Let's explore some US bikeshare data!\n")?;

    loop {
        let Some(spec) = prompt.filter_spec()? else {
            break;
        };
        info!(filter = %spec, "Exploring");

        let dataset = load(source, spec.city)?;
        let filtered = filter(&dataset, &spec);

        prompt.page_rows(&filtered)?;

        let report = analyze(&filtered, &spec);
        write!(prompt.output, "{}", TextReport(&report))?;

        let restart = prompt.ask("\nWould you like to restart? Enter yes or no.")?;
        if !restart.is_some_and(|r| r.eq_ignore_ascii_case("yes")) {
            break;
        }
    }

    Ok(prompt.into_output())
}
