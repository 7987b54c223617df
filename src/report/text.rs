use crate::analyze::{Counters, ExternalBlocker, IssueAnalyzed, WorkloadAnalyzed, TOTAL_ACTOR};
use crate::model::{glyphs, Catalog, Stage};
use crossterm::style::{style, Color, Stylize};
use itertools::Itertools;

pub const EXTERNAL_BLOCKERS_HEADER: &str = "Список блокеров, находящихся вне выборки:";
const PLAIN_STAGE_HEADER: &str = " N /  W /  T /  D /  C";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RenderStyle {
    Color,
    Plain,
    /// Chat markup: browse links and glyphs. Never colored.
    Markup,
}

impl RenderStyle {
    pub fn from_flags(no_color: bool, markup: bool) -> Self {
        match (markup, no_color) {
            (true, _) => RenderStyle::Markup,
            (false, true) => RenderStyle::Plain,
            (false, false) => RenderStyle::Color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub style: RenderStyle,
    pub active_only: bool,
    pub show_links: bool,
    /// Jira base URL for markup links.
    pub host: String,
}

pub trait TextReport {
    fn report_lines(&self, catalog: &Catalog, options: &RenderOptions) -> Vec<String>;
}

impl TextReport for WorkloadAnalyzed {
    fn report_lines(&self, catalog: &Catalog, options: &RenderOptions) -> Vec<String> {
        let renderer = TextRenderer { catalog, options };
        let mut lines = vec![];

        for issue in &self.issues {
            lines.extend(renderer.issue_lines(issue));
        }

        lines.push(String::new());
        lines.push(renderer.stage_header());
        lines.push(renderer.counters_line(TOTAL_ACTOR, &self.stats.total));
        for (actor, counters) in &self.stats.actors {
            lines.push(renderer.counters_line(actor, counters));
        }

        lines.push(String::new());
        lines.push(EXTERNAL_BLOCKERS_HEADER.to_string());
        for blocker in &self.external_blockers {
            lines.push(renderer.external_blocker_line(blocker));
        }
        lines
    }
}

struct TextRenderer<'a> {
    catalog: &'a Catalog,
    options: &'a RenderOptions,
}

impl TextRenderer<'_> {
    fn paint(&self, text: String, color: Option<Color>) -> String {
        match (self.options.style, color) {
            (RenderStyle::Color, Some(color)) => style(text).with(color).to_string(),
            _ => text,
        }
    }

    fn browse_link(&self, key: &str) -> String {
        format!("[{key}]({}/browse/{key})", self.options.host)
    }

    fn issue_lines(&self, analyzed: &IssueAnalyzed) -> Vec<String> {
        if self.options.active_only && !analyzed.active {
            return vec![];
        }
        let issue = &analyzed.issue;
        let points = issue.rounded_points().unwrap_or(0);

        if self.options.style == RenderStyle::Markup {
            let mut lines = vec![format!(
                "{} {} [[{:>3}]] *{}* {}",
                self.browse_link(&issue.key),
                self.catalog.priority_glyph(&issue.priority),
                points,
                issue.assignee,
                self.catalog.status_glyph(&issue.status),
            )];
            if self.options.show_links {
                lines.extend(
                    analyzed
                        .blocked_by
                        .iter()
                        .filter(|link| {
                            self.catalog
                                .alias(&link.status)
                                .is_some_and(|alias| alias.is_open_work())
                        })
                        .map(|link| {
                            format!(
                                "    {}{}{} {} {}",
                                glyphs::BLOCK,
                                glyphs::BLOCK,
                                glyphs::BLOCK,
                                self.browse_link(&link.key),
                                link.status,
                            )
                        }),
                );
            }
            return lines;
        }

        let mut line = self.paint(
            format!(
                "{:<9} [{:>2}][{:<12}] {:<30}",
                issue.key, points, issue.status, issue.assignee
            ),
            self.catalog.color(&issue.status),
        );
        if self.options.show_links {
            let blocked_by = analyzed.blocked_by.iter().map(|link| {
                self.paint(
                    format!(" << {} {} ({});", link.label, link.key, link.status),
                    self.catalog.color(&link.status),
                )
            });
            let blocks = analyzed
                .blocks
                .iter()
                .map(|link| format!(" >> {} {} ({});", link.label, link.key, link.status));
            line.push_str(&blocked_by.chain(blocks).join(""));
        }
        vec![line]
    }

    fn stage_header(&self) -> String {
        match self.options.style {
            RenderStyle::Markup => Stage::ALL
                .iter()
                .map(|stage| stage.alias().glyph())
                .join("/"),
            _ => PLAIN_STAGE_HEADER.to_string(),
        }
    }

    fn counters_line(&self, actor: &str, counters: &Counters) -> String {
        if self.options.style == RenderStyle::Markup {
            let counts = counters
                .statuses
                .iter()
                .map(|count| format!("{count:2}"))
                .join("/");
            return format!(
                "`{} [{:2}/{:2}] {}`",
                counts, counters.active_points, counters.points, actor
            );
        }
        let counts = Stage::ALL
            .iter()
            .map(|&stage| {
                self.paint(
                    format!("{:2}", counters.count(stage)),
                    self.catalog.stage_color(stage),
                )
            })
            .join(" / ");
        format!(
            "{}\t[{:2} / {:2}] {}",
            counts, counters.active_points, counters.points, actor
        )
    }

    fn external_blocker_line(&self, blocker: &ExternalBlocker) -> String {
        match self.options.style {
            RenderStyle::Markup => format!(
                "{} {} заблокирована задачей {}",
                glyphs::DAMN,
                self.browse_link(&blocker.blocked),
                self.browse_link(&blocker.blocker),
            ),
            _ => format!(
                "Issue {:<9} is blocked by {:<9} which is not in current scope!",
                blocker.blocked, blocker.blocker
            ),
        }
    }
}
