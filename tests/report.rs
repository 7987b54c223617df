use jira_workload::analyze::{Analyzer, DataAnalysis, ExternalBlocker, WorkloadAnalyzed};
use jira_workload::jira::JiraIssue;
use jira_workload::model::{Catalog, Stage, DEFAULT_POINTS_FIELD};
use jira_workload::report::{RenderOptions, RenderStyle, TextReport, EXTERNAL_BLOCKERS_HEADER};
use serde_json::{json, Value};

fn analyze(catalog: &Catalog, search: Value) -> WorkloadAnalyzed {
    let issues: Vec<JiraIssue> = serde_json::from_value(search["issues"].clone()).unwrap();
    let mut data = DataAnalysis::new(catalog);
    data.insert_issues(issues.iter().map(|issue| issue.snapshot(DEFAULT_POINTS_FIELD)));
    data.analyze_workload()
}

fn plain(show_links: bool, active_only: bool) -> RenderOptions {
    RenderOptions {
        style: RenderStyle::Plain,
        active_only,
        show_links,
        host: "https://jira.example.com".to_string(),
    }
}

fn blocked_by(key: &str, status: &str) -> Value {
    json!({
        "type": {"name": "Blocks", "inward": "is blocked by", "outward": "blocks"},
        "inwardIssue": {"key": key, "fields": {"status": {"name": status}}}
    })
}

#[test]
fn single_assignee_workload() {
    let catalog = Catalog::default();
    let analyzed = analyze(
        &catalog,
        json!({"total": 2, "issues": [
            {"key": "X-1", "fields": {
                "assignee": {"name": "ann"}, "status": {"name": "Новая"},
                "priority": {"name": "Обычный"}, "customfield_10006": 3.0}},
            {"key": "X-2", "fields": {
                "assignee": {"name": "ann"}, "status": {"name": "Закрыта"},
                "priority": {"name": "Низкий"}, "customfield_10006": 5.0}}
        ]}),
    );

    let total = &analyzed.stats.total;
    assert_eq!(total.count(Stage::New), 1);
    assert_eq!(total.count(Stage::Closed), 1);
    assert_eq!(total.points, 8);
    assert_eq!(total.active_points, 3);
    assert_eq!(&analyzed.stats.actors["ann"], total);
}

#[test]
fn hidden_dependency_is_reported() {
    let catalog = Catalog::default();
    let analyzed = analyze(
        &catalog,
        json!({"total": 2, "issues": [
            {"key": "A", "fields": {
                "assignee": {"name": "ann"}, "status": {"name": "В Работе"},
                "issuelinks": [blocked_by("B", "Новая"), blocked_by("C", "Закрыта")]}},
            {"key": "C", "fields": {
                "assignee": {"name": "bob"}, "status": {"name": "Закрыта"}}}
        ]}),
    );
    assert_eq!(analyzed.external_blockers, vec![ExternalBlocker::new("A", "B")]);

    let lines = analyzed.report_lines(&catalog, &plain(true, false));
    let header = lines
        .iter()
        .position(|line| line == EXTERNAL_BLOCKERS_HEADER)
        .unwrap();
    assert_eq!(
        &lines[header + 1..],
        ["Issue A         is blocked by B         which is not in current scope!"]
    );
    assert!(lines[0].contains(" << is blocked by B (Новая); << is blocked by C (Закрыта);"));
}

#[test]
fn active_only_report_hides_finished_work_but_keeps_counts() {
    let catalog = Catalog::default();
    let analyzed = analyze(
        &catalog,
        json!({"issues": [
            {"key": "X-1", "fields": {"assignee": {"name": "ann"}, "status": {"name": "Закрыта"}}},
            {"key": "X-2", "fields": {"assignee": {"name": "ann"}, "status": {"name": "В Работе"}}}
        ]}),
    );
    let lines = analyzed.report_lines(&catalog, &plain(false, true));
    assert!(lines[0].starts_with("X-2"));
    assert_eq!(lines[1], "");
    assert!(lines.iter().all(|line| !line.starts_with("X-1")));
    assert!(lines.contains(&" 0 /  1 /  0 /  0 /  1\t[ 0 /  0] Total".to_string()));
}

#[test]
fn unassigned_and_unknown_status_issues_are_tolerated() {
    let catalog = Catalog::default();
    let analyzed = analyze(
        &catalog,
        json!({"issues": [
            {"key": "X-1", "fields": {"assignee": null, "status": {"name": "Backlog"},
                "customfield_10006": "n/a"}}
        ]}),
    );
    assert_eq!(analyzed.stats.total.statuses, [0; 5]);
    assert_eq!(analyzed.stats.total.points, 0);
    assert!(analyzed.stats.actors.contains_key(""));
}
