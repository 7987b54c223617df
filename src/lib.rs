//! Workload and blocker report for a Jira search.
//!
//! Issues returned by a JQL query are folded into per-assignee status and
//! effort counters, blocked-by links are checked against the result set, and
//! both are rendered as colored text, plain text or chat markup.

pub mod analyze;
pub mod jira;
pub mod logging;
pub mod model;
pub mod report;
pub mod utils;
