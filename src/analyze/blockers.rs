use crate::model::{Catalog, IssueSnapshot, LinkDirection};
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

/// An in-scope issue waiting on an active issue the query did not return.
#[derive(Debug, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub struct ExternalBlocker {
    pub blocked: String,
    pub blocker: String,
}

impl ExternalBlocker {
    pub fn new(blocked: impl ToString, blocker: impl ToString) -> Self {
        Self {
            blocked: blocked.to_string(),
            blocker: blocker.to_string(),
        }
    }
}

/// Blocked-by edges between issue keys.
///
/// Only blockers whose captured status is active become edges. Every observed
/// issue is in scope whether or not it has blockers.
pub struct BlockerGraph<'a> {
    catalog: &'a Catalog,
    scope: IndexSet<String>,
    /// blocked key -> (blocker key -> blocker status)
    edges: IndexMap<String, IndexMap<String, String>>,
}

impl<'a> BlockerGraph<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            scope: IndexSet::new(),
            edges: IndexMap::new(),
        }
    }

    /// Records edges even when `issue` itself is no longer active.
    pub fn observe(&mut self, issue: &IssueSnapshot) {
        self.scope.insert(issue.key.clone());
        for link in issue.links_in(LinkDirection::BlockedBy) {
            if !self.catalog.is_active(&link.status) {
                continue;
            }
            self.edges
                .entry(issue.key.clone())
                .or_default()
                .insert(link.key.clone(), link.status.clone());
        }
    }

    pub fn in_scope(&self, key: &str) -> bool {
        self.scope.contains(key)
    }

    /// Active blockers of `key` with their captured status.
    pub fn active_blockers_of(&self, key: &str) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .get(key)
            .into_iter()
            .flatten()
            .map(|(blocker, status)| (blocker.as_str(), status.as_str()))
    }

    /// Sorted by blocked key, then blocker key.
    pub fn external_blockers(&self) -> Vec<ExternalBlocker> {
        self.edges
            .iter()
            .flat_map(|(blocked, blockers)| {
                blockers
                    .keys()
                    .filter(move |blocker| !self.in_scope(blocker))
                    .map(move |blocker| ExternalBlocker::new(blocked, blocker))
            })
            .sorted()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkFact;

    fn graph<'a>(catalog: &'a Catalog, issues: &[IssueSnapshot]) -> BlockerGraph<'a> {
        let mut graph = BlockerGraph::new(catalog);
        for issue in issues {
            graph.observe(issue);
        }
        graph
    }

    #[test]
    fn only_active_blockers_outside_scope_are_external() {
        let catalog = Catalog::default();
        let a = IssueSnapshot::new("A", "ann", "В Работе")
            .with_link(LinkFact::blocked_by("B", "Новая", "is blocked by"))
            .with_link(LinkFact::blocked_by("C", "Закрыта", "is blocked by"));
        let c = IssueSnapshot::new("C", "bob", "Закрыта");
        let graph = graph(&catalog, &[a, c]);

        assert_eq!(graph.external_blockers(), vec![ExternalBlocker::new("A", "B")]);
        assert!(graph.in_scope("C"));
        assert!(!graph.in_scope("B"));
        assert_eq!(graph.active_blockers_of("A").collect::<Vec<_>>(), [("B", "Новая")]);
    }

    #[test]
    fn in_scope_blocker_is_not_external() {
        let catalog = Catalog::default();
        let graph = graph(
            &catalog,
            &[
                IssueSnapshot::new("A", "ann", "Новая")
                    .with_link(LinkFact::blocked_by("B", "В Работе", "is blocked by")),
                IssueSnapshot::new("B", "bob", "В Работе"),
            ],
        );
        assert!(graph.external_blockers().is_empty());
        assert_eq!(graph.active_blockers_of("A").count(), 1);
    }

    #[test]
    fn closed_dependents_still_get_edges() {
        let catalog = Catalog::default();
        let graph = graph(
            &catalog,
            &[IssueSnapshot::new("A", "ann", "Закрыта")
                .with_link(LinkFact::blocked_by("Z", "Тестирование", "is blocked by"))],
        );
        assert_eq!(graph.external_blockers(), vec![ExternalBlocker::new("A", "Z")]);
    }

    #[test]
    fn blocks_links_do_not_create_edges() {
        let catalog = Catalog::default();
        let graph = graph(
            &catalog,
            &[IssueSnapshot::new("A", "ann", "Новая")
                .with_link(LinkFact::blocks("Z", "Новая", "blocks"))],
        );
        assert!(graph.external_blockers().is_empty());
        assert_eq!(graph.active_blockers_of("A").count(), 0);
    }

    #[test]
    fn external_blockers_are_sorted() {
        let catalog = Catalog::default();
        let graph = graph(
            &catalog,
            &[
                IssueSnapshot::new("B", "ann", "Новая")
                    .with_link(LinkFact::blocked_by("Z", "Новая", "is blocked by"))
                    .with_link(LinkFact::blocked_by("Y", "Новая", "is blocked by")),
                IssueSnapshot::new("A", "ann", "Новая")
                    .with_link(LinkFact::blocked_by("Z", "Новая", "is blocked by")),
            ],
        );
        assert_eq!(
            graph.external_blockers(),
            vec![
                ExternalBlocker::new("A", "Z"),
                ExternalBlocker::new("B", "Y"),
                ExternalBlocker::new("B", "Z"),
            ]
        );
    }

    #[test]
    fn scope_covers_issues_observed_later() {
        let catalog = Catalog::default();
        let graph = graph(
            &catalog,
            &[
                IssueSnapshot::new("A", "ann", "Новая")
                    .with_link(LinkFact::blocked_by("B", "Новая", "is blocked by")),
                IssueSnapshot::new("B", "ann", "Новая"),
            ],
        );
        assert!(graph.external_blockers().is_empty());
    }
}
