use crate::jira::JiraIssue;
use crate::model::{Config, Error, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;

const SEARCH_PATH: &str = "/rest/api/2/search";
const SEARCH_FIELDS: [&str; 4] = ["assignee", "status", "priority", "issuelinks"];
const MAX_CONCURRENT_PAGES: usize = 4;

/// Called with (pages fetched, pages total).
pub type PageProgress<'a> = Box<dyn FnMut(usize, usize) + Send + 'a>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchPage {
    #[serde(default)]
    max_results: usize,
    #[serde(default)]
    total: usize,
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

pub struct JiraClient {
    http: Client,
    config: Config,
}

impl JiraClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn search_url(&self) -> String {
        format!("{}{}", self.config.host, SEARCH_PATH)
    }

    fn fields(&self) -> String {
        let mut fields: Vec<&str> = SEARCH_FIELDS.to_vec();
        fields.push(self.config.points_field.as_str());
        fields.join(",")
    }

    async fn fetch_page(&self, jql: &str, start_at: usize, max_results: usize) -> Result<SearchPage> {
        tracing::debug!(jql, start_at, max_results, "search page");
        let response = self
            .http
            .get(self.search_url())
            .basic_auth(&self.config.user, Some(&self.config.pass))
            .query(&[
                ("jql", jql.to_string()),
                ("startAt", start_at.to_string()),
                ("maxResults", max_results.to_string()),
                ("fields", self.fields()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<SearchPage>().await?)
    }
}

pub trait JiraSearcher {
    /// Every issue matching `jql`, in the order Jira returned them.
    async fn search_issues<'a>(
        &self,
        jql: &str,
        page_size: usize,
        cb: PageProgress<'a>,
    ) -> Result<Vec<JiraIssue>>;
}

impl JiraSearcher for JiraClient {
    async fn search_issues<'a>(
        &self,
        jql: &str,
        page_size: usize,
        cb: PageProgress<'a>,
    ) -> Result<Vec<JiraIssue>> {
        let fetch = move |start_at, max_results| self.fetch_page(jql, start_at, max_results);
        let issues = collect_pages(page_size.max(1), fetch, cb).await?;
        tracing::debug!(count = issues.len(), "search finished");
        Ok(issues)
    }
}

/// Reads the first page for the total, then the rest with a bounded number
/// of requests in flight. Issues keep page order whatever order pages land in.
async fn collect_pages<F, Fut>(
    page_size: usize,
    mut fetch: F,
    mut cb: PageProgress<'_>,
) -> Result<Vec<JiraIssue>>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<SearchPage>>,
{
    let first = fetch(0, page_size).await?;

    // Jira may cap maxResults below what was asked for.
    let step = if first.max_results > 0 {
        first.max_results
    } else {
        page_size
    };
    let offsets = remaining_offsets(first.total, step);
    let pages_total = offsets.len() + 1;
    cb(1, pages_total);

    let mut issues = first.issues;
    let mut pages = stream::iter(offsets)
        .map(|start_at| fetch(start_at, step))
        .buffered(MAX_CONCURRENT_PAGES);
    let mut fetched = 1;
    while let Some(page) = pages.next().await {
        issues.extend(page?.issues);
        fetched += 1;
        cb(fetched, pages_total);
    }
    Ok(issues)
}

/// Start offsets of the pages following the first one.
fn remaining_offsets(total: usize, step: usize) -> Vec<usize> {
    (step..total).step_by(step.max(1)).collect()
}
