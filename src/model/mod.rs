mod catalog;
mod config;
mod error;
mod issue;

pub use catalog::{glyphs, Catalog, Stage, StatusAlias};
pub use config::{Config, CONFIG_FILE_NAME, DEFAULT_POINTS_FIELD};
pub use error::{Error, Result};
pub use issue::{IssueSnapshot, LinkDirection, LinkFact};
