//! Backing stores for raw trip rows.
//!
//! [`TripSource`] is the seam between the loader and storage.
//! [`CsvDirSource`] reads the per-city CSV exports from a directory and
//! [`InMemorySource`] serves rows already held in memory.

mod csv_dir;
mod memory;
mod provider;

pub use csv_dir::CsvDirSource;
pub use memory::InMemorySource;
pub use provider::{RawRow, RawTable, TripSource};
