use crate::model::{Error, Result};
use directories::BaseDirs;
use serde_json::{from_str, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".jira.json";
pub const DEFAULT_POINTS_FIELD: &str = "customfield_10006";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub user: String,
    pub pass: String,
    pub host: String,
    /// Custom field holding effort points.
    pub points_field: String,
}

// Create
impl Config {
    pub fn default_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_config(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    fn new(
        user: impl ToString,
        pass: impl ToString,
        host: impl ToString,
        points_field: impl ToString,
    ) -> Self {
        Self {
            user: user.to_string(),
            pass: pass.to_string(),
            host: host.to_string().trim_end_matches('/').to_string(),
            points_field: points_field.to_string(),
        }
    }
}

// Parser
impl Config {
    fn parse(json_str: &str) -> Result<Self> {
        let details: Value = from_str(json_str)?;
        let Some(user) = details["user"].as_str() else {
            return Err(Error::Config("Not found 'user' field".into()));
        };
        let Some(pass) = details["pass"].as_str() else {
            return Err(Error::Config("Not found 'pass' field".into()));
        };
        let Some(host) = details["host"].as_str() else {
            return Err(Error::Config("Not found 'host' field".into()));
        };
        let points_field = details["pointsField"]
            .as_str()
            .unwrap_or(DEFAULT_POINTS_FIELD);
        Ok(Self::new(user, pass, host, points_field))
    }
}
