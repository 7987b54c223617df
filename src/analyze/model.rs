use crate::analyze::{ExternalBlocker, WorkloadStats};
use crate::model::{Catalog, IssueSnapshot, LinkDirection, LinkFact};

#[derive(Debug, Clone)]
pub struct DataAnalysis<'a> {
    pub catalog: &'a Catalog,
    /// In fetch order.
    pub issues: Vec<IssueSnapshot>,
}

impl<'a> DataAnalysis<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            issues: vec![],
        }
    }

    pub fn insert_issues(&mut self, issues: impl IntoIterator<Item = IssueSnapshot>) {
        self.issues.extend(issues);
    }
}

#[derive(Debug, Clone)]
pub struct WorkloadAnalyzed {
    pub issues: Vec<IssueAnalyzed>,
    pub stats: WorkloadStats,
    pub external_blockers: Vec<ExternalBlocker>,
}

/// An issue with the links its report line may annotate.
#[derive(Debug, Clone)]
pub struct IssueAnalyzed {
    pub issue: IssueSnapshot,
    pub active: bool,
    /// Empty unless the issue itself is active.
    pub blocked_by: Vec<LinkFact>,
    pub blocks: Vec<LinkFact>,
}

impl IssueAnalyzed {
    pub fn new(issue: IssueSnapshot, catalog: &Catalog) -> Self {
        let active = catalog.is_active(&issue.status);
        let blocked_by = if active {
            issue.links_in(LinkDirection::BlockedBy).cloned().collect()
        } else {
            vec![]
        };
        let blocks = issue
            .links_in(LinkDirection::Blocks)
            .cloned()
            .collect();
        Self {
            issue,
            active,
            blocked_by,
            blocks,
        }
    }
}
