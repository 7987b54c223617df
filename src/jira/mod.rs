pub mod issue;
pub mod search;

pub use issue::JiraIssue;
pub use search::{JiraClient, JiraSearcher, PageProgress};
