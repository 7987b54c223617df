use crate::model::{Catalog, IssueSnapshot, Stage};
use indexmap::IndexMap;

pub const TOTAL_ACTOR: &str = "Total";

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Counters {
    /// Issue counts indexed by [`Stage::slot`].
    pub statuses: [u32; 5],
    pub points: i64,
    /// Points of issues that are New or InProgress.
    pub active_points: i64,
}

impl Counters {
    pub fn count(&self, stage: Stage) -> u32 {
        self.statuses[stage.slot()]
    }

    fn add(&mut self, stage: Option<Stage>, points: Option<i64>) {
        if let Some(stage) = stage {
            self.statuses[stage.slot()] += 1;
        }
        if let Some(points) = points {
            self.points = self.points.saturating_add(points);
            if stage.is_some_and(Stage::counts_active_points) {
                self.active_points = self.active_points.saturating_add(points);
            }
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct WorkloadStats {
    pub total: Counters,
    /// Per assignee, in order of first appearance.
    pub actors: IndexMap<String, Counters>,
}

/// Folds issues into per-assignee and total counters.
///
/// Not idempotent: recording the same issue twice counts it twice.
pub struct StatAggregator<'a> {
    catalog: &'a Catalog,
    stats: WorkloadStats,
}

impl<'a> StatAggregator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            stats: WorkloadStats::default(),
        }
    }

    pub fn record(&mut self, issue: &IssueSnapshot) {
        let stage = self.catalog.stage(&issue.status);
        let points = issue.rounded_points();

        let actor = self
            .stats
            .actors
            .entry(issue.assignee.clone())
            .or_default();
        actor.add(stage, points);
        self.stats.total.add(stage, points);
    }

    pub fn finalize(self) -> WorkloadStats {
        self.stats
    }
}
