use crate::model::{IssueSnapshot, LinkFact};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const BLOCKED_BY_LABEL: &str = "is blocked by";
pub const BLOCKS_LABEL: &str = "blocks";

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraFields {
    #[serde(default)]
    pub assignee: Option<JiraUser>,
    #[serde(default)]
    pub status: Option<JiraNamed>,
    #[serde(default)]
    pub priority: Option<JiraNamed>,
    #[serde(default, rename = "issuelinks")]
    pub issue_links: Option<Vec<JiraIssueLink>>,
    /// Everything else, custom fields included.
    #[serde(flatten)]
    pub unknowns: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraNamed {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueLink {
    #[serde(rename = "type")]
    pub link_type: JiraLinkType,
    #[serde(default)]
    pub inward_issue: Option<JiraLinkedIssue>,
    #[serde(default)]
    pub outward_issue: Option<JiraLinkedIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraLinkType {
    #[serde(default)]
    pub inward: String,
    #[serde(default)]
    pub outward: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraLinkedIssue {
    pub key: String,
    #[serde(default)]
    pub fields: JiraLinkedFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraLinkedFields {
    #[serde(default)]
    pub status: Option<JiraNamed>,
}

// Normalize
impl JiraIssue {
    pub fn snapshot(&self, points_field: &str) -> IssueSnapshot {
        tracing::debug!(issue = ?self, "raw issue");

        let fields = &self.fields;
        let assignee = fields
            .assignee
            .as_ref()
            .and_then(|user| user.name.clone().or_else(|| user.display_name.clone()))
            .unwrap_or_default();
        let status = named(&fields.status);
        let priority = named(&fields.priority);

        let mut snapshot = IssueSnapshot::new(&self.key, assignee, status).with_priority(priority);
        if let Some(raw) = fields.unknowns.get(points_field) {
            tracing::debug!(key = %self.key, ?raw, "effort points");
            snapshot.points = decode_points(raw);
        }
        snapshot.links = fields
            .issue_links
            .iter()
            .flatten()
            .flat_map(link_facts)
            .collect();
        snapshot
    }
}

fn named(value: &Option<JiraNamed>) -> String {
    value
        .as_ref()
        .map(|named| named.name.clone())
        .unwrap_or_default()
}

fn linked_status(issue: &JiraLinkedIssue) -> String {
    named(&issue.fields.status)
}

fn link_facts(link: &JiraIssueLink) -> Vec<LinkFact> {
    tracing::debug!(inward = ?link.inward_issue, outward = ?link.outward_issue, "issue link");

    let mut facts = vec![];
    if let Some(inward) = &link.inward_issue {
        if link.link_type.inward == BLOCKED_BY_LABEL {
            facts.push(LinkFact::blocked_by(
                &inward.key,
                linked_status(inward),
                &link.link_type.inward,
            ));
        }
    }
    if let Some(outward) = &link.outward_issue {
        if link.link_type.outward == BLOCKS_LABEL {
            facts.push(LinkFact::blocks(
                &outward.key,
                linked_status(outward),
                &link.link_type.outward,
            ));
        }
    }
    facts
}

/// Numbers and numeric strings count, anything else is "not estimated".
/// So is a value whose rounded form does not fit the counters.
fn decode_points(value: &Value) -> Option<f64> {
    let points = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    points.filter(|points| fits_counter(points.round()))
}

// i64::MAX is not representable as f64; 2^63 is the first value past it.
fn fits_counter(rounded: f64) -> bool {
    rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < -(i64::MIN as f64)
}
