use crate::analyze::{BlockerGraph, DataAnalysis, IssueAnalyzed, StatAggregator, WorkloadAnalyzed};

pub trait Analyzer {
    fn analyze_workload(&self) -> WorkloadAnalyzed;
}

impl Analyzer for DataAnalysis<'_> {
    fn analyze_workload(&self) -> WorkloadAnalyzed {
        let mut aggregator = StatAggregator::new(self.catalog);
        let mut graph = BlockerGraph::new(self.catalog);
        let mut issues = Vec::with_capacity(self.issues.len());
        for issue in &self.issues {
            aggregator.record(issue);
            graph.observe(issue);
            issues.push(IssueAnalyzed::new(issue.clone(), self.catalog));
        }

        let external_blockers = graph.external_blockers();
        tracing::debug!(
            issues = issues.len(),
            external_blockers = external_blockers.len(),
            "workload analyzed"
        );
        WorkloadAnalyzed {
            issues,
            stats: aggregator.finalize(),
            external_blockers,
        }
    }
}
