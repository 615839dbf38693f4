//! Data Transfer Objects

mod analyze_options;

pub use analyze_options::AnalyzeOptions;
