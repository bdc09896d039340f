//! Trip statistics over a filtered dataset.
//!
//! Each statistic group (travel times, stations, durations, riders) is an
//! independent pure function over the same borrowed trips. [`analyzer`]
//! runs all four and bundles the results into a [`types::Report`].

pub mod analyzer;
pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;
