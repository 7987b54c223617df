pub mod analyzer;
mod blockers;
mod model;
mod stats;

pub use analyzer::Analyzer;
pub use blockers::{BlockerGraph, ExternalBlocker};
pub use model::{DataAnalysis, IssueAnalyzed, WorkloadAnalyzed};
pub use stats::{Counters, StatAggregator, WorkloadStats, TOTAL_ACTOR};
