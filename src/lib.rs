pub mod analyzers;
pub mod calendar;
pub mod city;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod source;
pub mod trip;

pub use error::{AnalysisError, AnalysisResult};
